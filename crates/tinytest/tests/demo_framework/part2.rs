use tinytest::{CaseContext, Registry, check, check_eq, message, require};

// Helper called from a case; prints through the case's context.
fn bar(ctx: &mut CaseContext<'_>, input: bool) -> bool {
    message!(ctx, "called 'bool bar(bool);'");
    input
}

pub fn register(registry: &mut Registry) {
    let mut part2 = registry.suite("suite_part2");

    part2.case("case3", |ctx| {
        let called = bar(ctx, true);
        check!(ctx, called);
        let s1 = String::from("same");
        let s2 = String::from("same");
        check_eq!(ctx, s1, s2);
        Ok(())
    });

    part2.case("case4", |ctx| {
        let values = vec![1, 2, 3];
        require!(ctx, !values.is_empty());
        check_eq!(ctx, values[0], 1);
        Ok(())
    });
}
