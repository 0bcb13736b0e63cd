//! Type mapping between host primitives and interface-language types.

use shapegen_ir::Primitive;

/// Outcome of looking a primitive up in the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// The primitive has a direct output type.
    Type(&'static str),
    /// The primitive is on the deny-list and must not degrade to the unknown type.
    Rejected,
}

/// Trait for mapping host types to output type strings.
pub trait TypeMapper {
    /// Look a primitive up in the fixed mapping table.
    fn map_primitive(&self, primitive: Primitive) -> Mapping;

    /// Output type for host types with no mapping.
    fn unknown_type(&self) -> &'static str;

    /// Union a type with the runtime-absent value.
    fn nullable(&self, ty: &str) -> String;

    /// Union a type with the may-be-missing value.
    fn optional(&self, ty: &str) -> String;
}

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    pub const NUMBER: &'static str = "number";
    pub const STRING: &'static str = "string";
    pub const BOOLEAN: &'static str = "boolean";
    pub const ANY: &'static str = "any";
}

impl TypeMapper for TypeScriptTypeMapper {
    fn map_primitive(&self, primitive: Primitive) -> Mapping {
        match primitive {
            p if p.is_numeric() => Mapping::Type(Self::NUMBER),
            p if p.is_complex() => Mapping::Rejected,
            Primitive::String | Primitive::Char => Mapping::Type(Self::STRING),
            Primitive::Bool => Mapping::Type(Self::BOOLEAN),
            _ => Mapping::Type(Self::ANY),
        }
    }

    fn unknown_type(&self) -> &'static str {
        Self::ANY
    }

    fn nullable(&self, ty: &str) -> String {
        format!("{} | null", ty)
    }

    fn optional(&self, ty: &str) -> String {
        format!("{} | undefined", ty)
    }
}
