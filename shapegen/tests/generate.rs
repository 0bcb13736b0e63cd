//! Generation tests over hand-built registries.
//!
//! These cover the walker's observable behavior independently of the derive
//! macro. Run `cargo insta review` to update snapshots when making
//! intentional changes.

use shapegen::{
    Config, Error, Generator, TypeList,
    ir::{FieldDef, Primitive, RecordType, TypeDescriptor, TypeRegistry},
};

fn int() -> TypeDescriptor {
    TypeDescriptor::primitive(Primitive::Isize)
}

fn string() -> TypeDescriptor {
    TypeDescriptor::primitive(Primitive::String)
}

fn nullable(inner: TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor::nullable(inner)
}

fn registry(records: impl IntoIterator<Item = RecordType>) -> TypeRegistry {
    records.into_iter().collect()
}

/// Run one `generate_types` call on a fresh generator.
fn generate_with(config: Config, registry: TypeRegistry, roots: &[&str]) -> Result<String, Error> {
    let mut generator = Generator::with_config(config);
    generate_on(&mut generator, registry, roots)
}

fn generate(registry: TypeRegistry, roots: &[&str]) -> Result<String, Error> {
    generate_with(Config::default(), registry, roots)
}

fn generate_on(
    generator: &mut Generator,
    registry: TypeRegistry,
    roots: &[&str],
) -> Result<String, Error> {
    let mut out = Vec::new();
    generator.generate_types(&mut out, &TypeList::from_registry(registry, roots.to_vec()))?;
    Ok(String::from_utf8(out).expect("generated output is UTF-8"))
}

fn outer_inner() -> TypeRegistry {
    registry([
        RecordType::new("Outer").field(FieldDef::new("InnerStuff", TypeDescriptor::record("Inner"))),
        RecordType::new("Inner")
            .field(FieldDef::new("X", nullable(int())).json("X,omitempty"))
            .field(FieldDef::new("Y", nullable(int()))),
    ])
}

#[test]
fn test_outer_inner_example() {
    let text = generate(outer_inner(), &["Outer"]).unwrap();
    insta::assert_snapshot!(text, @r"
    interface IOuter {
    	InnerStuff: IInner;
    }

    interface IInner {
    	X: number | null | undefined;
    	Y: number | null;
    }
    ");
}

#[test]
fn test_output_has_no_trailing_newline() {
    let text = generate(outer_inner(), &["Outer"]).unwrap();
    assert!(text.ends_with('}'));
    assert_eq!(text.matches("\n\n").count(), 1);
}

#[test]
fn test_empty_record() {
    let text = generate(registry([RecordType::new("Empty")]), &["Empty"]).unwrap();
    assert_eq!(text, "interface IEmpty {\n}");

    let text = generate_with(
        Config::new().prefix("Message"),
        registry([RecordType::new("Empty")]),
        &["Empty"],
    )
    .unwrap();
    assert_eq!(text, "interface IMessageEmpty {\n}");
}

#[test]
fn test_strings_and_skipped_fields() {
    let record = RecordType::new("Strings")
        .field(FieldDef::new("SomeField", string()).json("textstuff"))
        .field(FieldDef::new("Another", string()))
        .field(FieldDef::new("DontLookAtMe", string()).json("-"));
    let text = generate(registry([record]), &["Strings"]).unwrap();
    assert_eq!(
        text,
        "interface IStrings {\n\ttextstuff: string;\n\tAnother: string;\n}"
    );
}

#[test]
fn test_every_numeric_width_renders_number() {
    let widths = [
        Primitive::I8,
        Primitive::I16,
        Primitive::I32,
        Primitive::I64,
        Primitive::I128,
        Primitive::Isize,
        Primitive::U8,
        Primitive::U16,
        Primitive::U32,
        Primitive::U64,
        Primitive::U128,
        Primitive::Usize,
        Primitive::F32,
        Primitive::F64,
    ];
    let record = widths.iter().fold(RecordType::new("Numbers"), |record, width| {
        record.field(FieldDef::new(width.as_str(), TypeDescriptor::primitive(*width)))
    });

    let text = generate(registry([record]), &["Numbers"]).unwrap();
    let field_lines: Vec<_> = text.lines().filter(|l| l.starts_with('\t')).collect();
    assert_eq!(field_lines.len(), widths.len());
    for (line, width) in field_lines.iter().zip(widths) {
        assert_eq!(*line, format!("\t{}: number;", width.as_str()));
    }
}

#[test]
fn test_skipped_record_field_is_not_walked() {
    let records = registry([
        RecordType::new("Holder")
            .field(FieldDef::new("Hidden", TypeDescriptor::record("Hidden")).json("-"))
            .field(FieldDef::new("Shown", int())),
        RecordType::new("Hidden").field(FieldDef::new("Secret", string())),
    ]);
    let mut generator = Generator::new();
    let text = generate_on(&mut generator, records, &["Holder"]).unwrap();

    assert_eq!(text, "interface IHolder {\n\tShown: number;\n}");
    assert!(!text.contains("Hidden"));
    assert!(!generator.ledger().contains("Hidden"));
}

#[test]
fn test_nullable_then_optional_order() {
    let record = RecordType::new("Unions")
        .field(FieldDef::new("a", nullable(string())))
        .field(FieldDef::new("b", nullable(string())).json("b,omitempty"))
        .field(FieldDef::new("c", string()).json("c,omitempty"))
        .field(FieldDef::new("d", nullable(TypeDescriptor::record("Unions"))).json("d,omitempty"));
    let text = generate(registry([record]), &["Unions"]).unwrap();
    insta::assert_snapshot!(text, @r"
    interface IUnions {
    	a: string | null;
    	b: string | null | undefined;
    	c: string | undefined;
    	d: IUnions | null | undefined;
    }
    ");
}

#[test]
fn test_self_referential_record_terminates() {
    let node = RecordType::new("Node")
        .field(FieldDef::new("Value", int()))
        .field(FieldDef::new("Next", nullable(TypeDescriptor::record("Node"))))
        .field(FieldDef::new("Twin", TypeDescriptor::record("Node")));
    let text = generate(registry([node]), &["Node"]).unwrap();

    assert_eq!(text.matches("interface INode").count(), 1);
    assert_eq!(
        text,
        "interface INode {\n\tValue: number;\n\tNext: INode | null;\n\tTwin: INode;\n}"
    );
}

#[test]
fn test_mutually_referential_records_terminate() {
    let records = registry([
        RecordType::new("Parent").field(FieldDef::new("Child", nullable(TypeDescriptor::record("Child")))),
        RecordType::new("Child").field(FieldDef::new("Parent", nullable(TypeDescriptor::record("Parent")))),
    ]);
    let text = generate(records, &["Parent"]).unwrap();
    assert_eq!(
        text,
        "interface IParent {\n\tChild: IChild | null;\n}\n\n\
         interface IChild {\n\tParent: IParent | null;\n}"
    );
}

#[test]
fn test_shared_nested_record_rendered_once() {
    let records = registry([
        RecordType::new("A").field(FieldDef::new("Shared", TypeDescriptor::record("Shared"))),
        RecordType::new("B").field(FieldDef::new("Shared", nullable(TypeDescriptor::record("Shared")))),
        RecordType::new("Shared").field(FieldDef::new("Id", int())),
    ]);
    let text = generate(records, &["A", "B"]).unwrap();

    assert_eq!(text.matches("interface IShared").count(), 1);
    insta::assert_snapshot!(text, @r"
    interface IA {
    	Shared: IShared;
    }

    interface IShared {
    	Id: number;
    }

    interface IB {
    	Shared: IShared | null;
    }
    ");
}

#[test]
fn test_same_root_listed_twice_rendered_once() {
    let text = generate(outer_inner(), &["Outer", "Outer", "Inner"]).unwrap();
    assert_eq!(text.matches("interface IOuter").count(), 1);
    assert_eq!(text.matches("interface IInner").count(), 1);
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_ledger_spans_calls_on_one_generator() {
    let mut generator = Generator::new();

    let first = generate_on(&mut generator, outer_inner(), &["Inner"]).unwrap();
    assert!(first.starts_with("interface IInner"));

    let second = generate_on(&mut generator, outer_inner(), &["Outer"]).unwrap();
    assert_eq!(second, "interface IOuter {\n\tInnerStuff: IInner;\n}");

    // Nothing left to write
    let third = generate_on(&mut generator, outer_inner(), &["Outer", "Inner"]).unwrap();
    assert_eq!(third, "");
}

#[test]
fn test_fresh_generator_has_fresh_ledger() {
    let first = generate(outer_inner(), &["Outer"]).unwrap();
    let second = generate(outer_inner(), &["Outer"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_nested_records_follow_first_encounter_order() {
    let records = registry([
        RecordType::new("Root")
            .field(FieldDef::new("First", TypeDescriptor::record("First")))
            .field(FieldDef::new("Second", TypeDescriptor::record("Second")))
            .field(FieldDef::new("FirstAgain", TypeDescriptor::record("First"))),
        RecordType::new("First").field(FieldDef::new("Deep", TypeDescriptor::record("Deep"))),
        RecordType::new("Second").field(FieldDef::new("Deep", TypeDescriptor::record("Deep"))),
        RecordType::new("Deep"),
    ]);
    let text = generate(records, &["Root"]).unwrap();
    let headers: Vec<_> = text
        .lines()
        .filter_map(|l| l.strip_prefix("interface "))
        .collect();
    assert_eq!(
        headers,
        ["IRoot {", "IFirst {", "IDeep {", "ISecond {"]
    );
}

#[test]
fn test_complex_field_fails_with_identifiable_error() {
    let record = RecordType::new("Signal")
        .field(FieldDef::new("Gain", int()))
        .field(FieldDef::new("Phase", nullable(TypeDescriptor::primitive(Primitive::Complex128))));
    let err = generate(registry([record]), &["Signal"]).unwrap_err();

    match &err {
        Error::UnmappableType { record, field, ty } => {
            assert_eq!(record, "Signal");
            assert_eq!(field, "Phase");
            assert_eq!(ty, "complex128");
        }
        other => panic!("expected UnmappableType, got {other:?}"),
    }
    assert!(err.to_string().contains("complex128"));
}

#[test]
fn test_complex_field_with_override_is_accepted() {
    let record = RecordType::new("Signal").field(
        FieldDef::new("Phase", TypeDescriptor::primitive(Primitive::Complex64)).ts_type("[number, number]"),
    );
    let text = generate(registry([record]), &["Signal"]).unwrap();
    assert_eq!(text, "interface ISignal {\n\tPhase: [number, number];\n}");
}

#[test]
fn test_unknown_types_degrade_to_any() {
    let record = RecordType::new("Loose")
        .field(FieldDef::new("Anything", TypeDescriptor::opaque("interface{}")))
        .field(FieldDef::new("Items", nullable(TypeDescriptor::opaque("Vec"))));
    let text = generate(registry([record]), &["Loose"]).unwrap();
    assert_eq!(
        text,
        "interface ILoose {\n\tAnything: any;\n\tItems: any | null;\n}"
    );
}

#[test]
fn test_override_and_description() {
    let record = RecordType::new("SomeData")
        .field(FieldDef::new("X", int()).json("x"))
        .field(FieldDef::new("Y", TypeDescriptor::primitive(Primitive::U64)))
        .field(FieldDef::new("Z", string()))
        .field(
            FieldDef::new("W", string())
                .ts_type("ExplicitEnum")
                .description("An explicitly typed enum we define somewhere else"),
        );
    let text = generate(registry([record]), &["SomeData"]).unwrap();
    insta::assert_snapshot!(text, @r"
    interface ISomeData {
    	x: number;
    	Y: number;
    	Z: string;
    	/**
    	 * An explicitly typed enum we define somewhere else
    	 */
    	W: ExplicitEnum;
    }
    ");
}

#[test]
fn test_indentation_changes_only_leading_whitespace() {
    let tabbed = generate(outer_inner(), &["Outer"]).unwrap();
    let spaced = generate_with(Config::new().indentation("    "), outer_inner(), &["Outer"]).unwrap();

    assert_ne!(tabbed, spaced);
    assert_eq!(tabbed.replace('\t', "    "), spaced);
}

#[test]
fn test_prefix_changes_only_interface_names() {
    let plain = generate(outer_inner(), &["Outer"]).unwrap();
    let prefixed = generate_with(Config::new().prefix("Message"), outer_inner(), &["Outer"]).unwrap();

    assert_eq!(
        prefixed,
        "interface IMessageOuter {\n\tInnerStuff: IMessageInner;\n}\n\n\
         interface IMessageInner {\n\tX: number | null | undefined;\n\tY: number | null;\n}"
    );
    assert_eq!(
        prefixed.replace("IMessage", "I"),
        plain
    );
}

#[test]
fn test_generate_types_stops_at_first_error() {
    let records = registry([
        RecordType::new("Good").field(FieldDef::new("Id", int())),
        RecordType::new("Bad").field(FieldDef::new("Z", TypeDescriptor::primitive(Primitive::Complex64))),
        RecordType::new("Never").field(FieldDef::new("Id", int())),
    ]);
    let mut generator = Generator::new();
    let mut out = Vec::new();
    let result = generator.generate_types(
        &mut out,
        &TypeList::from_registry(records, ["Good", "Bad", "Never"]),
    );

    assert!(matches!(result, Err(Error::UnmappableType { .. })));
    assert_eq!(String::from_utf8(out).unwrap(), "interface IGood {\n\tId: number;\n}");
    assert!(!generator.ledger().contains("Never"));
}
