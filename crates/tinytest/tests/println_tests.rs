//! Printer behavior, checked by a tinytest binary.

use std::process::ExitCode;

use tinytest::{Printer, Registry, SharedBuffer, check, check_eq, print_values, println_values};

fn register_empty(registry: &mut Registry) {
    registry.case("empty_print", |ctx| {
        let buffer = SharedBuffer::new();
        let mut out = Printer::new(buffer.clone());

        check!(ctx, print_values!(out).is_ok());
        check_eq!(ctx, buffer.take(), "");

        check!(ctx, println_values!(out).is_ok());
        check_eq!(ctx, buffer.take(), "");
        Ok(())
    });
}

fn register_default_separator(registry: &mut Registry) {
    registry.case("default_separator", |ctx| {
        let buffer = SharedBuffer::new();
        let mut out = Printer::new(buffer.clone());

        check!(ctx, print_values!(out, 5).is_ok());
        check_eq!(ctx, buffer.take(), "5");
        check!(ctx, println_values!(out, 5).is_ok());
        check_eq!(ctx, buffer.take(), "5\n");

        check!(ctx, print_values!(out, "one", "two", 3).is_ok());
        check_eq!(ctx, buffer.take(), "one two 3");
        check!(ctx, println_values!(out, "one", "two", 3).is_ok());
        check_eq!(ctx, buffer.take(), "one two 3\n");
        Ok(())
    });
}

fn register_custom_separator(registry: &mut Registry) {
    registry.case("custom_separator", |ctx| {
        let buffer = SharedBuffer::new();
        let mut out = Printer::with_separator(buffer.clone(), '+');

        check!(ctx, print_values!(out).is_ok());
        check_eq!(ctx, buffer.take(), "");
        check!(ctx, println_values!(out).is_ok());
        check_eq!(ctx, buffer.take(), "");

        check!(ctx, print_values!(out, "string").is_ok());
        check_eq!(ctx, buffer.take(), "string");
        check!(ctx, println_values!(out, "string").is_ok());
        check_eq!(ctx, buffer.take(), "string\n");

        check!(ctx, print_values!(out, 1, 2).is_ok());
        check_eq!(ctx, buffer.take(), "1+2");
        check!(ctx, println_values!(out, 1, 2, 3, 4, 5, 6, 7).is_ok());
        check_eq!(ctx, buffer.take(), "1+2+3+4+5+6+7\n");
        Ok(())
    });

    registry.case("growing_argument_lists", |ctx| {
        let buffer = SharedBuffer::new();
        let mut out = Printer::with_separator(buffer.clone(), '+');
        let values: Vec<u32> = (1..=13).collect();
        for count in 1..=values.len() {
            let args: Vec<&dyn std::fmt::Display> = values[..count]
                .iter()
                .map(|v| v as &dyn std::fmt::Display)
                .collect();
            let expected = values[..count]
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join("+");

            check!(ctx, out.print(&args).is_ok());
            check_eq!(ctx, buffer.take(), expected);
            check!(ctx, out.println(&args).is_ok());
            check_eq!(ctx, buffer.take(), format!("{expected}\n"));
        }
        Ok(())
    });
}

fn main() -> ExitCode {
    let mut registry = Registry::new();
    {
        let mut suite = registry.suite("printer");
        register_empty(&mut suite);
        register_default_separator(&mut suite);
        register_custom_separator(&mut suite);
    }
    tinytest::main(&registry)
}
