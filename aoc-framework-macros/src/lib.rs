//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Build a compile error spanning the macro call site.
fn call_site_error(message: &str) -> TokenStream {
    Error::new(proc_macro2::Span::call_site(), message)
        .to_compile_error()
        .into()
}

/// Procedural macro attribute that generates a `SolutionRunner` implementation.
///
/// The generated `run` routes to the runner function matching the provided solution types, the
/// generated `answer` routes to the matching answer function, and the generated `has_part` reports
/// whether part two was provided.
///
/// # Properties
///
/// - `name` (required): An expression that evaluates to `&str`, representing the solution's
///   display name.
///
/// - `part_one` (required): The type implementing `Solution<PartOne>` for solving part one.
///
/// - `part_two` (optional): The type implementing `Solution<PartTwo>` for solving part two.
///   If omitted, the runner only has part one.
///
/// - `parsed` (optional): A type that implements `ParseData`, used to parse input before solving.
///   If omitted, the unparsed input string is passed directly to solvers.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - Required properties (`name`, `part_one`) are missing
/// - Any property is specified more than once
/// - An unsupported property is provided
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(name = "Day 1", part_one = Day01)]
/// struct Day01Runner;
/// ```
///
/// ```ignore
/// #[solution_runner(name = "Day 3", parsed = Triangles, part_one = Day03, part_two = Day03)]
/// impl AdventOfCode2016<3> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    // The expression to use as a solution name; should resolve to string slice
    let mut name_expr_opt: Option<Expr> = None;
    // The type to use for a `ParseData` generic parameter
    let mut parsed_ty_opt: Option<Type> = None;
    // The type to use for a `Solution<PartOne>` generic parameter
    let mut part_one_ty_opt: Option<Type> = None;
    // The type to use for a `Solution<PartTwo>` generic parameter
    let mut part_two_ty_opt: Option<Type> = None;

    let solution_runner_parser = syn::meta::parser(|meta| {
        // check for expected property keys, track value, error if a duplicate key appears
        if meta.path.is_ident("name") {
            if name_expr_opt.is_some() {
                return Err(meta.error("duplicate 'name' property"));
            }
            name_expr_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("parsed") {
            if parsed_ty_opt.is_some() {
                return Err(meta.error("duplicate 'parsed' property"));
            }
            parsed_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_one") {
            if part_one_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_one' property"));
            }
            part_one_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_two") {
            if part_two_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_two' property"));
            }
            part_two_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with solution_runner_parser);

    let Some(name_expr) = name_expr_opt else {
        return call_site_error("missing required property: 'name'");
    };
    let Some(part_one_ty) = part_one_ty_opt else {
        return call_site_error("missing required property: 'part_one'");
    };

    // only part one solutions are missing part two
    let has_part_two = part_two_ty_opt.is_some();

    // pick the runner and answer functions matching the provided solution types
    let (run_call, answer_call) = match (parsed_ty_opt, part_two_ty_opt) {
        (None, None) => (
            quote! {
                aoc_framework::runner::solve_half_solution::<#part_one_ty>(
                    #name_expr, input, handler, timed, part
                )
            },
            quote! {
                aoc_framework::runner::answer_half_solution::<#part_one_ty>(input, part)
            },
        ),
        (None, Some(part_two_ty)) => (
            quote! {
                aoc_framework::runner::solve_full_solution::<#part_one_ty, #part_two_ty>(
                    #name_expr, input, handler, timed, part
                )
            },
            quote! {
                aoc_framework::runner::answer_full_solution::<#part_one_ty, #part_two_ty>(
                    input, part
                )
            },
        ),
        (Some(parsed_ty), None) => (
            quote! {
                aoc_framework::runner::solve_parsed_half_solution::<#parsed_ty, #part_one_ty>(
                    #name_expr, input, handler, timed, part
                )
            },
            quote! {
                aoc_framework::runner::answer_parsed_half_solution::<#parsed_ty, #part_one_ty>(
                    input, part
                )
            },
        ),
        (Some(parsed_ty), Some(part_two_ty)) => (
            quote! {
                aoc_framework::runner::solve_parsed_full_solution::<
                    #parsed_ty,
                    #part_one_ty,
                    #part_two_ty
                >(#name_expr, input, handler, timed, part)
            },
            quote! {
                aoc_framework::runner::answer_parsed_full_solution::<
                    #parsed_ty,
                    #part_one_ty,
                    #part_two_ty
                >(input, part)
            },
        ),
    };

    let original_input = input.clone(); // clone before macro consumes input
    let item = parse_macro_input!(input as Item);

    // implement the trait on the struct or the impl block's self type

    let runner_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return call_site_error(
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            );
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts

        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool,
                part: ::core::option::Option<aoc_framework::PartKind>,
            ) -> aoc_framework::DynamicResult<()> {
                #run_call
            }

            fn answer(
                input: &str,
                part: aoc_framework::PartKind,
            ) -> aoc_framework::DynamicResult<::core::option::Option<::std::string::String>> {
                #answer_call
            }

            fn has_part(part: aoc_framework::PartKind) -> bool {
                match part {
                    aoc_framework::PartKind::One => true,
                    aoc_framework::PartKind::Two => #has_part_two,
                }
            }
        }
    })
}
