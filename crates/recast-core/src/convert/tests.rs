use super::*;
use crate::{
    types::{DateTime, Decimal, Duration, TypeHandle},
    value::{ObjectClass, ObjectValue, tests::sample_value},
};
use uuid::Uuid;

// ---- helpers -----------------------------------------------------------

fn ctx() -> ConvertContext {
    ConvertContext::invariant()
}

fn req(kind: Kind) -> KindSpec {
    KindSpec::required(kind)
}

fn opt(kind: Kind) -> KindSpec {
    KindSpec::optional(kind)
}

fn run(source: Kind, value: &Value, target: Kind) -> Outcome {
    try_convert_value(req(source), Some(value), req(target), &ctx())
}

// ---- identity ----------------------------------------------------------

#[test]
fn identity_returns_the_value_unchanged() {
    for kind in Kind::ALL {
        let value = sample_value(kind).expect("sample");
        assert_eq!(
            run(kind, &value, kind),
            Outcome::Converted(Some(value)),
            "kind: {kind}"
        );
    }
}

// ---- numeric family ----------------------------------------------------

#[test]
fn byte_forty_two_becomes_asterisk() {
    assert_eq!(
        run(Kind::Uint8, &Value::Uint8(42), Kind::Char),
        Outcome::Converted(Some(Value::Char('*')))
    );
}

#[test]
fn numeric_pairings_route_through_the_coercer() {
    assert_eq!(
        run(Kind::Int16, &Value::Int16(256), Kind::Uint8),
        Outcome::Converted(Some(Value::Uint8(0)))
    );
    assert_eq!(
        run(Kind::Bool, &Value::Bool(true), Kind::Decimal),
        Outcome::Converted(Some(Value::Decimal(Decimal::ONE)))
    );
    assert_eq!(
        run(Kind::Float64, &Value::Float64(2.9), Kind::Int32),
        Outcome::Converted(Some(Value::Int32(2)))
    );
}

// ---- textual routing ---------------------------------------------------

#[test]
fn text_parses_to_bool_and_absent_text_defaults_false() {
    assert_eq!(
        run(Kind::Text, &Value::Text("True".into()), Kind::Bool),
        Outcome::Converted(Some(Value::Bool(true)))
    );

    // An absent textual source still satisfies a required Bool target;
    // the target's zero value stands in.
    assert_eq!(
        try_convert_value(req(Kind::Text), None, req(Kind::Bool), &ctx()),
        Outcome::Converted(Some(Value::Bool(false)))
    );
}

#[test]
fn numeric_text_parses_but_type_names_refuse_ints() {
    assert_eq!(
        run(Kind::Text, &Value::Text("42".into()), Kind::Int32),
        Outcome::Converted(Some(Value::Int32(42)))
    );

    let handle = TypeHandle::new("app::model::Widget").expect("valid path");
    assert_eq!(
        run(Kind::TypeName, &Value::TypeName(handle), Kind::Int32),
        Outcome::Refused(Refusal::Incompatible)
    );
}

#[test]
fn optional_decimal_to_text() {
    // Absent optional source against a required reference-kind target:
    // converts, and the result is itself absent.
    assert_eq!(
        try_convert_value(opt(Kind::Decimal), None, req(Kind::Text), &ctx()),
        Outcome::Converted(None)
    );

    let value = Value::Decimal(Decimal::new(42, 0));
    assert_eq!(
        try_convert_value(opt(Kind::Decimal), Some(&value), req(Kind::Text), &ctx()),
        Outcome::Converted(Some(Value::Text("42".into())))
    );
}

#[test]
fn garbled_text_refuses_with_a_parse_tag() {
    assert_eq!(
        run(Kind::Text, &Value::Text("forty-two".into()), Kind::Int32),
        Outcome::Refused(Refusal::Parse)
    );
}

// ---- binary and temporal adapters --------------------------------------

#[test]
fn uuid_survives_a_byte_round_trip() {
    let id = Uuid::from_u128(0xDEAD_BEEF_CAFE);

    let Outcome::Converted(Some(Value::Bytes(bytes))) =
        run(Kind::Uuid, &Value::Uuid(id), Kind::Bytes)
    else {
        panic!("expected a byte payload");
    };
    assert_eq!(bytes.len(), 16);

    assert_eq!(
        run(Kind::Bytes, &Value::Bytes(bytes), Kind::Uuid),
        Outcome::Converted(Some(Value::Uuid(id)))
    );
}

#[test]
fn short_byte_payloads_are_shape_mismatches() {
    assert_eq!(
        run(Kind::Bytes, &Value::Bytes(vec![1, 2, 3]), Kind::Uuid),
        Outcome::Refused(Refusal::Shape)
    );
}

#[test]
fn naive_and_offset_instants_adapt_both_ways() {
    let naive = DateTime::from_unix_nanos(42);
    let Outcome::Converted(Some(Value::DateTimeOffset(up))) =
        run(Kind::DateTime, &Value::DateTime(naive), Kind::DateTimeOffset)
    else {
        panic!("expected an offset payload");
    };
    assert_eq!(up.offset_secs(), 0);
    assert_eq!(up.utc_nanos(), 42);

    // Narrowing keeps the wall clock observed in the value's own offset.
    let eastern = DateTimeOffset::new(0, 3600);
    assert_eq!(
        run(
            Kind::DateTimeOffset,
            &Value::DateTimeOffset(eastern),
            Kind::DateTime
        ),
        Outcome::Converted(Some(Value::DateTime(DateTime::from_unix_nanos(
            3600 * 1_000_000_000
        ))))
    );
}

// ---- object hierarchy --------------------------------------------------

#[test]
fn upcasts_succeed_and_downcasts_refuse() {
    let derived = Value::Object(ObjectValue::new(ObjectClass::Derived, "d"));
    assert_eq!(
        run(Kind::Derived, &derived, Kind::Base),
        Outcome::Converted(Some(derived.clone()))
    );

    // The runtime class is Derived, but eligibility follows the declared
    // kind: a Base-declared value never narrows back down.
    assert_eq!(
        run(Kind::Base, &derived, Kind::Derived),
        Outcome::Refused(Refusal::Downcast)
    );
}

#[test]
fn declared_pairs_follow_the_assignability_table() {
    let kinds = [Kind::Capability, Kind::Base, Kind::Derived];
    for source in kinds {
        let value = sample_value(source).expect("sample");
        for target in kinds {
            let outcome = run(source, &value, target);
            assert_eq!(
                outcome.is_converted(),
                source.can_convert(target),
                "pair: {source} -> {target}"
            );
        }
    }
}

#[test]
fn objects_never_cross_into_other_families() {
    let base = sample_value(Kind::Base).expect("sample");
    assert_eq!(
        run(Kind::Base, &base, Kind::Text),
        Outcome::Refused(Refusal::Incompatible)
    );
    assert_eq!(
        run(Kind::Int64, &Value::Int64(1), Kind::Base),
        Outcome::Refused(Refusal::Incompatible)
    );
}

// ---- null propagation --------------------------------------------------

#[test]
fn absent_source_to_optional_target_is_always_absent() {
    for source in Kind::ALL {
        for target in Kind::ALL {
            assert_eq!(
                try_convert_value(opt(source), None, opt(target), &ctx()),
                Outcome::Converted(None),
                "pair: {source} -> {target}"
            );
        }
    }
}

#[test]
fn absent_source_to_required_target_tracks_static_compatibility() {
    for source in Kind::ALL {
        for target in Kind::ALL {
            let outcome = try_convert_value(opt(source), None, req(target), &ctx());
            if source.can_convert(target) {
                assert_eq!(
                    outcome,
                    Outcome::Converted(target.default_value()),
                    "pair: {source} -> {target}"
                );
            } else {
                assert_eq!(
                    outcome,
                    Outcome::Refused(Refusal::Incompatible),
                    "pair: {source} -> {target}"
                );
            }
        }
    }
}

// ---- strict entry point ------------------------------------------------

#[test]
fn strict_errors_carry_the_pairing_and_tag() {
    let value = Value::Duration(Duration::from_secs(1));
    let err = convert_value(req(Kind::Duration), Some(&value), req(Kind::Bool), &ctx())
        .expect_err("incompatible pairing");

    assert_eq!(err.source_kind, Kind::Duration);
    assert_eq!(err.target_kind, Kind::Bool);
    assert_eq!(err.refusal, Refusal::Incompatible);
    assert!(err.rendered.contains("Duration"));
}

#[test]
fn strict_renders_absent_sources_as_null() {
    let err = convert_value(req(Kind::Url), None, req(Kind::Uuid), &ctx())
        .expect_err("incompatible pairing");
    assert_eq!(err.rendered, "null");
}

#[test]
fn strict_agrees_with_non_strict_on_success() {
    let value = Value::Int32(7);
    assert_eq!(
        convert_value(req(Kind::Int32), Some(&value), req(Kind::Int64), &ctx()),
        Ok(Some(Value::Int64(7)))
    );
}

// ---- generic bridge ----------------------------------------------------

#[test]
fn generic_entry_points_follow_the_carrier_specs() {
    assert_eq!(convert::<i32, String>(&42, &ctx()), Ok("42".to_string()));
    assert_eq!(try_convert::<String, i32>(&"42".to_string(), &ctx()), Some(42));
    assert_eq!(try_convert::<String, i32>(&"forty".to_string(), &ctx()), None);
    assert_eq!(convert::<bool, i64>(&true, &ctx()), Ok(1));
}

#[test]
fn generic_optionals_layer_null_propagation() {
    let absent: Option<Decimal> = None;
    assert_eq!(
        try_convert::<Option<Decimal>, Option<String>>(&absent, &ctx()),
        Some(None)
    );
    assert_eq!(
        try_convert::<Option<Decimal>, Option<String>>(&Some(Decimal::new(42, 0)), &ctx()),
        Some(Some("42".to_string()))
    );
    // Absent against a required value kind yields the zero value.
    assert_eq!(try_convert::<Option<i32>, i32>(&None, &ctx()), Some(0));
}

#[test]
fn format_context_threads_through_the_codec() {
    let dt = DateTime::from_unix_nanos(1_700_000_000_000_000_000);
    let ctx = ConvertContext::with_format("[year]/[month]/[day]");
    assert_eq!(
        convert::<DateTime, String>(&dt, &ctx),
        Ok("2023/11/14".to_string())
    );
}

// ---- properties --------------------------------------------------------

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn int_text_round_trip(v in any::<i32>()) {
            let text = run(Kind::Int32, &Value::Int32(v), Kind::Text);
            let Outcome::Converted(Some(rendered)) = text else {
                panic!("int rendering is total");
            };
            prop_assert_eq!(
                run(Kind::Text, &rendered, Kind::Int32),
                Outcome::Converted(Some(Value::Int32(v)))
            );
        }

        #[test]
        fn uuid_byte_round_trip(hi in any::<u128>()) {
            let id = Uuid::from_u128(hi);
            let Outcome::Converted(Some(bytes)) =
                run(Kind::Uuid, &Value::Uuid(id), Kind::Bytes)
            else {
                panic!("uuid byte rendering is total");
            };
            prop_assert_eq!(
                run(Kind::Bytes, &bytes, Kind::Uuid),
                Outcome::Converted(Some(Value::Uuid(id)))
            );
        }

        #[test]
        fn duration_text_round_trip(nanos in any::<i64>()) {
            let d = Duration::from_nanos(nanos);
            let Outcome::Converted(Some(rendered)) =
                run(Kind::Duration, &Value::Duration(d), Kind::Text)
            else {
                panic!("duration rendering is total");
            };
            prop_assert_eq!(
                run(Kind::Text, &rendered, Kind::Duration),
                Outcome::Converted(Some(Value::Duration(d)))
            );
        }

        #[test]
        fn narrowing_matches_raw_bit_truncation(v in any::<i64>()) {
            prop_assert_eq!(
                run(Kind::Int64, &Value::Int64(v), Kind::Uint8),
                Outcome::Converted(Some(Value::Uint8(v as u8)))
            );
        }

        #[test]
        fn numeric_to_bool_agrees_with_nonzero(v in any::<i32>()) {
            prop_assert_eq!(
                run(Kind::Int32, &Value::Int32(v), Kind::Bool),
                Outcome::Converted(Some(Value::Bool(v != 0)))
            );
        }
    }
}
