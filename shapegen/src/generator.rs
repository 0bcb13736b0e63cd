//! The recursive type walker.

use std::io::Write;

use shapegen_ir::{Describe, FieldDef, RecordType, TypeDescriptor, TypeRegistry};

use crate::{
    Config, EmissionLedger, Error, Result,
    interface::{RenderedField, RenderedInterface},
    naming::interface_name,
    type_mapper::{Mapping, TypeMapper, TypeScriptTypeMapper},
};

/// Serialization name that removes a field from the output.
const SKIP_NAME: &str = "-";
/// Serialization modifier that marks a field optional.
const OMIT_EMPTY: &str = "omitempty";
const BLOCK_SEPARATOR: &[u8] = b"\n\n";

/// Ordered root types for one generation call, with every record they reach.
#[derive(Debug, Clone, Default)]
pub struct TypeList {
    registry: TypeRegistry,
    roots: Vec<TypeDescriptor>,
}

impl TypeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `T` as a root.
    pub fn with<T: Describe + ?Sized>(mut self) -> Self {
        self.push::<T>();
        self
    }

    /// Append the type of a sample value as a root.
    pub fn with_value<T: Describe + ?Sized>(self, _value: &T) -> Self {
        self.with::<T>()
    }

    pub fn push<T: Describe + ?Sized>(&mut self) -> &mut Self {
        T::register(&mut self.registry);
        self.roots.push(T::descriptor());
        self
    }

    /// Use an already populated registry, rooted at the named records.
    pub fn from_registry<I, S>(registry: TypeRegistry, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            registry,
            roots: roots
                .into_iter()
                .map(|root| TypeDescriptor::Record(root.into()))
                .collect(),
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn roots(&self) -> &[TypeDescriptor] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Walks record types and writes one interface block per distinct type.
///
/// The emission ledger lives as long as the generator, so repeated calls on
/// the same instance never render a type twice.
///
/// # Example
///
/// ```
/// use shapegen::{Generator, Record};
///
/// #[derive(Record)]
/// pub struct Point {
///     pub x: f64,
///     pub y: f64,
/// }
///
/// let mut generator = Generator::new();
/// let text = generator.render_single::<Point>().unwrap();
/// assert_eq!(text, "interface IPoint {\n\tx: number;\n\ty: number;\n}");
/// ```
#[derive(Debug, Default)]
pub struct Generator {
    config: Config,
    ledger: EmissionLedger,
    mapper: TypeScriptTypeMapper,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &EmissionLedger {
        &self.ledger
    }

    /// Render the type of `value` and every record newly reachable from it.
    ///
    /// Output already written when an error occurs is not retracted.
    pub fn generate_single<T: Describe + ?Sized>(
        &mut self,
        out: &mut impl Write,
        _value: &T,
    ) -> Result<()> {
        self.generate::<T>(out)
    }

    /// Render `T` and every record newly reachable from it.
    pub fn generate<T: Describe + ?Sized>(&mut self, out: &mut impl Write) -> Result<()> {
        self.generate_types(out, &TypeList::new().with::<T>())
    }

    /// Render every root in order, sharing one ledger across all of them.
    ///
    /// Stops at the first error.
    pub fn generate_types(&mut self, out: &mut impl Write, types: &TypeList) -> Result<()> {
        let mut sink = BlockSink::new(out);
        for root in types.roots() {
            let name = root_name(root)?;
            self.walk(&mut sink, types.registry(), name)?;
        }
        Ok(())
    }

    /// Render `T` into a string.
    pub fn render_single<T: Describe + ?Sized>(&mut self) -> Result<String> {
        let mut out = Vec::new();
        self.generate::<T>(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn walk<W: Write>(
        &mut self,
        sink: &mut BlockSink<'_, W>,
        registry: &TypeRegistry,
        name: &str,
    ) -> Result<()> {
        if !self.ledger.begin(name) {
            return Ok(());
        }

        let resolved = registry
            .get(name)
            .ok_or_else(|| Error::UnknownRecord {
                name: name.to_string(),
            })
            .and_then(|record| self.resolve_record(record));
        let (interface, nested) = match resolved {
            Ok(resolved) => resolved,
            Err(e) => {
                self.ledger.abandon(name);
                return Err(e);
            }
        };

        sink.write_block(&interface.render(&self.config.indentation))?;

        for nested_name in &nested {
            if !self.ledger.contains(nested_name) {
                self.walk(sink, registry, nested_name)?;
            }
        }
        Ok(())
    }

    /// Resolve every field of `record`.
    ///
    /// Also returns the nested records to walk next, in first-encounter order.
    fn resolve_record(&self, record: &RecordType) -> Result<(RenderedInterface, Vec<String>)> {
        let mut interface =
            RenderedInterface::new(interface_name(&self.config.prefix, &record.name));
        let mut nested: Vec<String> = Vec::new();

        for field in &record.fields {
            let Some(resolved) = self.resolve_field(record, field)? else {
                continue;
            };
            if let Some(name) = resolved.nested {
                if !self.ledger.contains(name) && !nested.iter().any(|n| n == name) {
                    nested.push(name.to_string());
                }
            }
            interface.fields.push(resolved.field);
        }

        Ok((interface, nested))
    }

    fn resolve_field<'a>(
        &self,
        record: &RecordType,
        field: &'a FieldDef,
    ) -> Result<Option<ResolvedField<'a>>> {
        if !field.exported {
            return Ok(None);
        }

        let tag = SerializationTag::parse(field.annotations.json.as_deref());
        if tag.skip {
            return Ok(None);
        }
        let name = tag.name.unwrap_or(&field.name);

        let (ty, nullable) = field.ty.unwrap_nullable();
        let mut nested = None;

        let mut output = if let Some(explicit) = &field.annotations.ts_type {
            explicit.clone()
        } else {
            match ty {
                TypeDescriptor::Record(record_name) => {
                    nested = Some(record_name.as_str());
                    interface_name(&self.config.prefix, record_name)
                }
                TypeDescriptor::Primitive(primitive) => match self.mapper.map_primitive(*primitive)
                {
                    Mapping::Type(mapped) => mapped.to_string(),
                    Mapping::Rejected => {
                        return Err(Error::UnmappableType {
                            record: record.name.clone(),
                            field: field.name.clone(),
                            ty: primitive.to_string(),
                        });
                    }
                },
                TypeDescriptor::Opaque(_) | TypeDescriptor::Nullable(_) => {
                    self.mapper.unknown_type().to_string()
                }
            }
        };

        if nullable {
            output = self.mapper.nullable(&output);
        }
        if tag.optional {
            output = self.mapper.optional(&output);
        }

        let mut rendered = RenderedField::new(name, output);
        if let Some(description) = field
            .annotations
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
        {
            rendered = rendered.description(description);
        }

        Ok(Some(ResolvedField {
            field: rendered,
            nested,
        }))
    }
}

struct ResolvedField<'a> {
    field: RenderedField,
    /// Record the field refers to, if any.
    nested: Option<&'a str>,
}

/// Parsed serialization-name annotation (`"name,modifier,..."`).
#[derive(Debug, Default, PartialEq, Eq)]
struct SerializationTag<'a> {
    name: Option<&'a str>,
    optional: bool,
    skip: bool,
}

impl<'a> SerializationTag<'a> {
    fn parse(tag: Option<&'a str>) -> Self {
        let Some(tag) = tag else {
            return Self::default();
        };
        if tag == SKIP_NAME {
            return Self {
                skip: true,
                ..Self::default()
            };
        }

        let mut parts = tag.split(',');
        let name = parts.next().filter(|name| !name.is_empty());
        let optional = parts.any(|modifier| modifier == OMIT_EMPTY);
        Self {
            name,
            optional,
            skip: false,
        }
    }
}

fn root_name(root: &TypeDescriptor) -> Result<&str> {
    match root.unwrap_nullable().0 {
        TypeDescriptor::Record(name) => Ok(name),
        other => Err(Error::NotARecord {
            name: other.to_string(),
        }),
    }
}

/// Writes blocks separated by one blank line, with no trailing newline.
struct BlockSink<'w, W: Write> {
    out: &'w mut W,
    written: usize,
}

impl<'w, W: Write> BlockSink<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, written: 0 }
    }

    fn write_block(&mut self, block: &str) -> std::io::Result<()> {
        if self.written > 0 {
            self.out.write_all(BLOCK_SEPARATOR)?;
        }
        self.out.write_all(block.as_bytes())?;
        self.written += 1;
        Ok(())
    }
}
