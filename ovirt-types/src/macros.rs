//! Declarative generators for schema types.
//!
//! Each schema type is written once as a field table; the macros emit the
//! struct, its getters, its builder and its XML reader from that table so
//! the readers stay uniform across the whole schema.

/// Declares an enumerated schema value.
macro_rules! xml_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All values in schema order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the text used for this value in XML.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::ovirt_core::ParseEnumError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    _ => Err(::ovirt_core::ParseEnumError::new(stringify!($name), s)),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl ::ovirt_core::XmlScalar for $name {
            const KIND: &'static str = stringify!($name);

            fn parse_text(text: &str) -> Option<Self> {
                text.trim().parse().ok()
            }
        }

        impl ::ovirt_core::XmlValue for $name {
            fn read_value(
                reader: &mut ::ovirt_core::XmlReader<'_>,
                start: &::ovirt_core::BytesStart<'_>,
            ) -> ::ovirt_core::Result<Self> {
                reader.read_scalar(start)
            }
        }
    };
}

/// Declares a schema struct together with its builder and reader.
///
/// - `attributes` are read from the start element;
/// - `elements` hold scalars, scalar collections and lists;
/// - `nested` hold single schema objects and are boxed, since the schema
///   references itself (a template has a VM, a VM has a template);
/// - `links` map a `<link rel>` to the list field that receives its `href`.
macro_rules! xml_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $tag:literal in $plural:literal {
            builder $builder:ident;
            attributes {
                $( $(#[$ameta:meta])* $afield:ident : $aty:ty = $atag:literal ),* $(,)?
            }
            elements {
                $( $(#[$emeta:meta])* $efield:ident : $ety:ty = $etag:literal ),* $(,)?
            }
            nested {
                $( $(#[$nmeta:meta])* $nfield:ident : $nty:ty = $ntag:literal ),* $(,)?
            }
            links {
                $( $rel:literal => $lfield:ident ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                $afield: Option<$aty>,
            )*
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                $efield: Option<$ety>,
            )*
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                $nfield: Option<Box<$nty>>,
            )*
        }

        impl $name {
            /// Returns an empty builder.
            #[must_use]
            pub fn builder() -> $builder {
                $builder::new()
            }

            $(
                #[doc = concat!("The `", $atag, "` attribute.")]
                $(#[$ameta])*
                #[must_use]
                pub fn $afield(&self) -> Option<&$aty> {
                    self.$afield.as_ref()
                }
            )*
            $(
                #[doc = concat!("The `<", $etag, ">` element.")]
                $(#[$emeta])*
                #[must_use]
                pub fn $efield(&self) -> Option<&$ety> {
                    self.$efield.as_ref()
                }
            )*
            $(
                #[doc = concat!("The `<", $ntag, ">` element.")]
                $(#[$nmeta])*
                #[must_use]
                pub fn $nfield(&self) -> Option<&$nty> {
                    self.$nfield.as_deref()
                }
            )*
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $( $afield: Option<$aty>, )*
            $( $efield: Option<$ety>, )*
            $( $nfield: Option<Box<$nty>>, )*
        }

        impl $builder {
            /// Creates an empty builder.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Sets the `", $atag, "` attribute.")]
                #[must_use]
                pub fn $afield(mut self, value: impl Into<$aty>) -> Self {
                    self.$afield = Some(value.into());
                    self
                }
            )*
            $(
                #[doc = concat!("Sets the `<", $etag, ">` element.")]
                #[must_use]
                pub fn $efield(mut self, value: impl Into<$ety>) -> Self {
                    self.$efield = Some(value.into());
                    self
                }
            )*
            $(
                #[doc = concat!("Sets the `<", $ntag, ">` element.")]
                #[must_use]
                pub fn $nfield(mut self, value: impl Into<$nty>) -> Self {
                    self.$nfield = Some(Box::new(value.into()));
                    self
                }
            )*

            #[doc = concat!("Builds the [`", stringify!($name), "`].")]
            #[must_use]
            pub fn build(self) -> $name {
                $name {
                    $( $afield: self.$afield, )*
                    $( $efield: self.$efield, )*
                    $( $nfield: self.$nfield, )*
                }
            }
        }

        impl From<$builder> for $name {
            fn from(builder: $builder) -> Self {
                builder.build()
            }
        }

        impl ::ovirt_core::XmlRead for $name {
            const TAG: &'static str = $tag;
            const PLURAL_TAG: &'static str = $plural;

            fn read_element(
                reader: &mut ::ovirt_core::XmlReader<'_>,
                start: &::ovirt_core::BytesStart<'_>,
            ) -> ::ovirt_core::Result<Self> {
                #[allow(unused_mut)]
                let mut builder = $builder::new();
                $(
                    builder.$afield = reader.attribute::<$aty>(start, $atag)?;
                )*

                let mut links: Vec<::ovirt_core::Link> = Vec::new();
                while let Some(child) = reader.next_child()? {
                    match ::ovirt_core::element_name(&child)? {
                        $(
                            $etag => {
                                if let Some(value) = reader.read_field::<$ety>(&child)? {
                                    builder.$efield = Some(value);
                                }
                            }
                        )*
                        $(
                            $ntag => {
                                if let Some(value) = reader.read_field::<$nty>(&child)? {
                                    builder.$nfield = Some(Box::new(value));
                                }
                            }
                        )*
                        "link" => {
                            if let Some(link) = reader.read_link(&child)? {
                                links.push(link);
                            }
                        }
                        _ => reader.skip_unknown(&child, $tag)?,
                    }
                }

                #[allow(unused_mut)]
                let mut object = builder.build();
                for link in links {
                    match link.rel.as_str() {
                        $(
                            $rel => object
                                .$lfield
                                .get_or_insert_with(::ovirt_core::List::default)
                                .set_href(link.href),
                        )*
                        _ => ::tracing::trace!(rel = %link.rel, element = $tag, "ignoring link"),
                    }
                }
                Ok(object)
            }
        }

        impl ::ovirt_core::XmlValue for $name {
            fn read_value(
                reader: &mut ::ovirt_core::XmlReader<'_>,
                start: &::ovirt_core::BytesStart<'_>,
            ) -> ::ovirt_core::Result<Self> {
                <Self as ::ovirt_core::XmlRead>::read_element(reader, start)
            }
        }
    };
}
