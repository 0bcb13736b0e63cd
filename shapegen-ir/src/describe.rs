//! Compile-time type description, the stand-in for runtime reflection.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

use crate::{Primitive, RecordType, TypeDescriptor, TypeRegistry};

/// A host type that can describe itself to the generator.
///
/// Implemented for primitives and common wrappers here, and for record types
/// by `#[derive(Record)]`.
pub trait Describe {
    /// Descriptor used when this type appears as a field type.
    fn descriptor() -> TypeDescriptor;

    /// Register every record type reachable from this type.
    ///
    /// Non-record types have nothing to register.
    fn register(_registry: &mut TypeRegistry) {}
}

/// A record type: a named aggregate of fields.
pub trait Record: Describe {
    /// The full field list of this record, in declaration order.
    fn record_type() -> RecordType;
}

/// Record name for one instantiation of a generic record.
///
/// Each type argument is appended after an underscore, so `Wrapper<Inner>`
/// and `Wrapper<String>` become `Wrapper_Inner` and `Wrapper_String` and
/// never collide in a registry.
pub fn instantiated_name(base: &str, args: &[TypeDescriptor]) -> String {
    let mut name = base.to_string();
    for arg in args {
        name.push('_');
        push_name_fragment(&mut name, arg);
    }
    name
}

fn push_name_fragment(name: &mut String, ty: &TypeDescriptor) {
    match ty {
        TypeDescriptor::Primitive(primitive) => name.push_str(primitive.as_str()),
        TypeDescriptor::Nullable(inner) => {
            name.push_str("Nullable");
            push_name_fragment(name, inner);
        }
        TypeDescriptor::Record(record) => name.push_str(record),
        TypeDescriptor::Opaque(opaque) => name.extend(
            opaque
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_'),
        ),
    }
}

macro_rules! impl_primitive {
    ($($ty:ty => $primitive:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::Primitive(Primitive::$primitive)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => String,
    str => String,
}

impl<T: Describe> Describe for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::nullable(T::descriptor())
    }

    fn register(registry: &mut TypeRegistry) {
        T::register(registry);
    }
}

macro_rules! impl_transparent {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Describe + ?Sized> Describe for $wrapper<T> {
                fn descriptor() -> TypeDescriptor {
                    T::descriptor()
                }

                fn register(registry: &mut TypeRegistry) {
                    T::register(registry);
                }
            }
        )*
    };
}

impl_transparent!(Box, Rc, Arc);

impl<T: Describe + ?Sized> Describe for &T {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }

    fn register(registry: &mut TypeRegistry) {
        T::register(registry);
    }
}

// Collections have no interface-language mapping and degrade to `any`.
macro_rules! impl_opaque {
    ($($name:literal => [$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Describe for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::opaque($name)
                }
            }
        )*
    };
}

impl_opaque! {
    "Vec" => [T] Vec<T>,
    "VecDeque" => [T] VecDeque<T>,
    "slice" => [T] [T],
    "HashMap" => [K, V, S] HashMap<K, V, S>,
    "BTreeMap" => [K, V] BTreeMap<K, V>,
    "HashSet" => [T, S] HashSet<T, S>,
    "BTreeSet" => [T] BTreeSet<T>,
}

impl<T, const N: usize> Describe for [T; N] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::opaque("array")
    }
}

impl Describe for () {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::opaque("()")
    }
}
