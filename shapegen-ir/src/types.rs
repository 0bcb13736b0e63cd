//! Core descriptor types.

use std::fmt;

/// Primitive host types the walker knows how to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
    /// Complex number with two `f32` parts.
    Complex64,
    /// Complex number with two `f64` parts.
    Complex128,
}

impl Primitive {
    /// Canonical name of this primitive, as used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "String",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
        }
    }

    /// Look up a primitive by name.
    ///
    /// Accepts Rust spellings (`u64`, `String`, `str`) as well as the
    /// struct-tag style spellings (`int`, `uint64`, `float64`, `byte`, `rune`)
    /// that schema files commonly use.
    pub fn from_name(name: &str) -> Option<Self> {
        let primitive = match name {
            "bool" => Self::Bool,
            "i8" | "int8" => Self::I8,
            "i16" | "int16" => Self::I16,
            "i32" | "int32" | "rune" => Self::I32,
            "i64" | "int64" => Self::I64,
            "i128" => Self::I128,
            "isize" | "int" => Self::Isize,
            "u8" | "uint8" | "byte" => Self::U8,
            "u16" | "uint16" => Self::U16,
            "u32" | "uint32" => Self::U32,
            "u64" | "uint64" => Self::U64,
            "u128" => Self::U128,
            "usize" | "uint" | "uintptr" => Self::Usize,
            "f32" | "float32" => Self::F32,
            "f64" | "float64" => Self::F64,
            "char" => Self::Char,
            "String" | "str" | "string" => Self::String,
            "complex64" => Self::Complex64,
            "complex128" => Self::Complex128,
            _ => return None,
        };
        Some(primitive)
    }

    /// Integer or floating point type of any width.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::U128
                | Self::Usize
                | Self::F32
                | Self::F64
        )
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A primitive value type.
    Primitive(Primitive),
    /// A pointer/optional wrapper whose value may be absent at runtime.
    Nullable(Box<TypeDescriptor>),
    /// Another record type, referenced by name.
    Record(String),
    /// A host type without a known mapping.
    Opaque(String),
}

impl TypeDescriptor {
    pub fn primitive(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }

    pub fn nullable(inner: TypeDescriptor) -> Self {
        Self::Nullable(Box::new(inner))
    }

    pub fn record(name: impl Into<String>) -> Self {
        Self::Record(name.into())
    }

    pub fn opaque(name: impl Into<String>) -> Self {
        Self::Opaque(name.into())
    }

    /// Strip every nullable wrapper.
    ///
    /// Returns the innermost type and whether any wrapper was removed.
    pub fn unwrap_nullable(&self) -> (&TypeDescriptor, bool) {
        let mut current = self;
        let mut nullable = false;
        while let Self::Nullable(inner) = current {
            current = inner;
            nullable = true;
        }
        (current, nullable)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{}", p),
            Self::Nullable(inner) => write!(f, "Option<{}>", inner),
            Self::Record(name) | Self::Opaque(name) => f.write_str(name),
        }
    }
}

/// Raw field annotations, stored exactly as the host declared them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    /// Serialization name with comma-delimited modifiers, e.g. `"x,omitempty"`.
    pub json: Option<String>,
    /// Literal output type that bypasses inference.
    pub ts_type: Option<String>,
    /// Human-readable field description.
    pub description: Option<String>,
}

/// A field as declared on a host record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeDescriptor,
    pub annotations: Annotations,
    /// Whether the field is part of the type's public surface.
    pub exported: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Annotations::default(),
            exported: true,
        }
    }

    /// Set the serialization-name annotation (`"name,modifier,..."`).
    pub fn json(mut self, tag: impl Into<String>) -> Self {
        self.annotations.json = Some(tag.into());
        self
    }

    /// Set the explicit output type override.
    pub fn ts_type(mut self, ty: impl Into<String>) -> Self {
        self.annotations.ts_type = Some(ty.into());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.annotations.description = Some(text.into());
        self
    }

    /// Mark the field as private to the host type.
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

/// A named, fixed-shape host type with ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl RecordType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}
