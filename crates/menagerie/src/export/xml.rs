//! XML rendering of class diagrams.
//!
//! The document is a `ClassDiagram` root holding one `Class` or `Enum`
//! element per type, in document order:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <ClassDiagram GeneratedAt="2024-05-01T12:00:00Z" Namespace="menagerie_animals">
//!   <Class Name="Cat" FullName="menagerie_animals::Cat" IsAbstract="false">
//!     <BaseType>Animal</BaseType>
//!     <Comment>Cats are independent and curious.</Comment>
//!     <Properties>
//!       <Property Name="lives" Type="u8"/>
//!     </Properties>
//!     <Methods>
//!       <Method Name="purr" ReturnType="String" IsAbstract="false">
//!         <Parameters>
//!           <Parameter Name="volume" Type="u8"/>
//!         </Parameters>
//!       </Method>
//!     </Methods>
//!   </Class>
//!   <Enum Name="FoodKind" FullName="menagerie_animals::FoodKind" IsAbstract="false">
//!     <Value>Meat</Value>
//!   </Enum>
//! </ClassDiagram>
//! ```
//!
//! Empty `Properties`, `Methods` and `Parameters` wrappers are left out.
//! `GeneratedAt` keeps sub-second digits only when the timestamp has them.
//! Names or comments holding control characters XML 1.0 cannot carry, even
//! escaped, fail with [`Error::Render`].

use chrono::SecondsFormat;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use menagerie_core::descriptor::{DiagramDocument, OperationDescriptor, TypeDescriptor};

use super::{Error, Exporter};

/// Renders diagrams as indented XML.
#[derive(Debug, Clone, Copy)]
pub struct XmlExporter {
    indent: usize,
}

impl XmlExporter {
    /// Creates an exporter indenting nested elements by `indent` spaces.
    ///
    /// An indent of zero writes the whole document on one line.
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for XmlExporter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Exporter for XmlExporter {
    fn export(&self, document: &DiagramDocument) -> Result<String, Error> {
        let writer = if self.indent == 0 {
            Writer::new(Vec::new())
        } else {
            Writer::new_with_indent(Vec::new(), b' ', self.indent)
        };
        let mut xml = XmlWriter { writer };

        xml.event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let generated_at = document
            .generated_at()
            .to_rfc3339_opts(SecondsFormat::AutoSi, true);
        let mut root = BytesStart::new("ClassDiagram");
        root.push_attribute(("GeneratedAt", generated_at.as_str()));
        root.push_attribute(("Namespace", checked(document.hierarchy())?));
        xml.event(Event::Start(root))?;

        for descriptor in document.types() {
            write_type(&mut xml, descriptor)?;
        }

        xml.end("ClassDiagram")?;

        String::from_utf8(xml.writer.into_inner()).map_err(|err| Error::Render(err.to_string()))
    }
}

/// Thin wrapper mapping writer failures into [`Error::Render`].
struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl XmlWriter {
    fn event(&mut self, event: Event<'_>) -> Result<(), Error> {
        self.writer
            .write_event(event)
            .map_err(|err| Error::Render(err.to_string()))
    }

    fn end(&mut self, name: &str) -> Result<(), Error> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), Error> {
        self.event(Event::Start(BytesStart::new(name)))?;
        self.event(Event::Text(BytesText::new(checked(text)?)))?;
        self.end(name)
    }
}

/// Passes `text` through unless it holds a character XML 1.0 cannot carry.
fn checked(text: &str) -> Result<&str, Error> {
    match text.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(Error::Render(format!(
            "U+{:04X} cannot be written to XML in {text:?}",
            u32::from(c)
        ))),
        None => Ok(text),
    }
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        _ => c >= ' ',
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn write_type(xml: &mut XmlWriter, descriptor: &TypeDescriptor) -> Result<(), Error> {
    let tag = if descriptor.is_enumeration() {
        "Enum"
    } else {
        "Class"
    };

    let mut element = BytesStart::new(tag);
    element.push_attribute(("Name", checked(descriptor.name())?));
    element.push_attribute(("FullName", checked(descriptor.full_name())?));
    element.push_attribute(("IsAbstract", bool_attr(descriptor.is_abstract())));

    let has_children = descriptor.base_type_name().is_some()
        || !descriptor.annotations().is_empty()
        || !descriptor.fields().is_empty()
        || !descriptor.operations().is_empty()
        || !descriptor.enumerated_values().is_empty();
    if !has_children {
        return xml.event(Event::Empty(element));
    }
    xml.event(Event::Start(element))?;

    if let Some(base) = descriptor.base_type_name() {
        xml.text_element("BaseType", base)?;
    }

    for annotation in descriptor.annotations() {
        xml.text_element("Comment", annotation)?;
    }

    if !descriptor.fields().is_empty() {
        xml.event(Event::Start(BytesStart::new("Properties")))?;
        for field in descriptor.fields() {
            let mut property = BytesStart::new("Property");
            property.push_attribute(("Name", checked(field.name())?));
            property.push_attribute(("Type", checked(field.type_name())?));
            xml.event(Event::Empty(property))?;
        }
        xml.end("Properties")?;
    }

    if !descriptor.operations().is_empty() {
        xml.event(Event::Start(BytesStart::new("Methods")))?;
        for operation in descriptor.operations() {
            write_operation(xml, operation)?;
        }
        xml.end("Methods")?;
    }

    for value in descriptor.enumerated_values() {
        xml.text_element("Value", value)?;
    }

    xml.end(tag)
}

fn write_operation(xml: &mut XmlWriter, operation: &OperationDescriptor) -> Result<(), Error> {
    let mut method = BytesStart::new("Method");
    method.push_attribute(("Name", checked(operation.name())?));
    method.push_attribute(("ReturnType", checked(operation.return_type())?));
    method.push_attribute(("IsAbstract", bool_attr(operation.is_abstract())));

    if operation.parameters().is_empty() {
        return xml.event(Event::Empty(method));
    }

    xml.event(Event::Start(method))?;
    xml.event(Event::Start(BytesStart::new("Parameters")))?;
    for parameter in operation.parameters() {
        let mut element = BytesStart::new("Parameter");
        element.push_attribute(("Name", checked(parameter.name())?));
        element.push_attribute(("Type", checked(parameter.type_name())?));
        xml.event(Event::Empty(element))?;
    }
    xml.end("Parameters")?;
    xml.end("Method")
}
