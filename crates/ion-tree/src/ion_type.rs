use core::fmt;

/// The thirteen kinds of Ion value.
///
/// A typed null carries one of these to say which kind of value it stands in
/// for, so `Null` here is the kind of the untyped `null`, not "no value".
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IonType {
    Null,
    Bool,
    Int,
    Float,
    Decimal,
    Timestamp,
    String,
    Symbol,
    Blob,
    Clob,
    Struct,
    List,
    SExp,
}

impl IonType {
    /// Every kind, in declaration order.
    pub const ALL: [IonType; 13] = [
        IonType::Null,
        IonType::Bool,
        IonType::Int,
        IonType::Float,
        IonType::Decimal,
        IonType::Timestamp,
        IonType::String,
        IonType::Symbol,
        IonType::Blob,
        IonType::Clob,
        IonType::Struct,
        IonType::List,
        IonType::SExp,
    ];

    /// Returns `true` for `struct`, `list` and `sexp`.
    ///
    /// ```
    /// use ion_tree::IonType;
    ///
    /// assert!(IonType::SExp.is_container());
    /// assert!(!IonType::Clob.is_container());
    /// ```
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Struct | Self::List | Self::SExp)
    }

    /// The keyword Ion text uses for this kind, e.g. in `null.list`.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Timestamp => "timestamp",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Blob => "blob",
            Self::Clob => "clob",
            Self::Struct => "struct",
            Self::List => "list",
            Self::SExp => "sexp",
        }
    }
}

impl fmt::Display for IonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
