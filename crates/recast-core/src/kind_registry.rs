///
/// Kind Registry
///
/// Single source of truth for per-kind capability metadata.
///

// NOTE: Bool and Char are Numeric by family on purpose: the coercion engine
// treats them as degenerate numeric kinds (0/1, code point).
// NOTE: zero_default distinguishes value kinds (a zero value exists) from
// reference kinds (the default is absent). Text is a reference kind: an
// absent source converts to an absent string, not to "".
macro_rules! kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Bool,
                "Bool",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Int8,
                "Int8",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Int16,
                "Int16",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Int32,
                "Int32",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Int64,
                "Int64",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Uint8,
                "Uint8",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Uint16,
                "Uint16",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Uint32,
                "Uint32",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Uint64,
                "Uint64",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Float32,
                "Float32",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Float64,
                "Float64",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Decimal,
                "Decimal",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Char,
                "Char",
                KindFamily::Numeric,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Bytes,
                "Bytes",
                KindFamily::Binary,
                parseable = true,
                formatable = true,
                zero_default = false
            ),
            (
                Text,
                "Text",
                KindFamily::Textual,
                parseable = true,
                formatable = true,
                zero_default = false
            ),
            (
                DateTime,
                "DateTime",
                KindFamily::Temporal,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                DateTimeOffset,
                "DateTimeOffset",
                KindFamily::Temporal,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Duration,
                "Duration",
                KindFamily::Temporal,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Uuid,
                "Uuid",
                KindFamily::Identifier,
                parseable = true,
                formatable = true,
                zero_default = true
            ),
            (
                Url,
                "Url",
                KindFamily::Locator,
                parseable = true,
                formatable = true,
                zero_default = false
            ),
            (
                Enum,
                "Enum",
                KindFamily::Enumerated,
                parseable = true,
                formatable = true,
                zero_default = false
            ),
            (
                TypeName,
                "TypeName",
                KindFamily::Reflective,
                parseable = true,
                formatable = true,
                zero_default = false
            ),
            (
                Capability,
                "Capability",
                KindFamily::Object,
                parseable = false,
                formatable = false,
                zero_default = false
            ),
            (
                Base,
                "Base",
                KindFamily::Object,
                parseable = false,
                formatable = false,
                zero_default = false
            ),
            (
                Derived,
                "Derived",
                KindFamily::Object,
                parseable = false,
                formatable = false,
                zero_default = false
            ),
        }
    };
}

/// Expand a consumer macro over every registry entry.
macro_rules! kind_registry {
    ($macro:ident) => {
        kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        kind_registry_entries!($macro, @args $($args)+)
    };
}
