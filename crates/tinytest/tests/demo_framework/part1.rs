use tinytest::{Registry, add_info, check, check_eq};

pub fn register(registry: &mut Registry) {
    let mut part1 = registry.suite("suite_part1");
    {
        let mut nested = part1.suite("suite_nested");
        nested.case("case1", |ctx| {
            check!(ctx, true);
            check_eq!(ctx, 2, 2);
            Ok(())
        });
    }

    part1.case("case2", |ctx| {
        add_info!(ctx, "msg1");
        add_info!(ctx, "msg2");
        check!(ctx, true);
        check!(ctx, ctx.pending_info().is_empty());
        Ok(())
    });

    // same name, different suite
    part1.case("case1", |ctx| {
        let name = ctx.name().to_string();
        check_eq!(ctx, name, "suite_part1/case1");
        Ok(())
    });
}
