//! Argument value types

use std::fmt;

/// The six fields a vuln_db invocation can set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Init,
    Bid,
    Cve,
    Product,
    ProductVersion,
    OnlyCheck,
}

impl Field {
    /// Every field, in the order they appear in `--help`
    pub const ALL: [Field; 6] = [
        Field::Init,
        Field::Bid,
        Field::Cve,
        Field::Product,
        Field::ProductVersion,
        Field::OnlyCheck,
    ];

    /// Argument id, also the long flag name without dashes
    pub fn id(self) -> &'static str {
        match self {
            Field::Init => "init",
            Field::Bid => "bid",
            Field::Cve => "cve",
            Field::Product => "product",
            Field::ProductVersion => "product_version",
            Field::OnlyCheck => "only_check",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.id())
    }
}

/// Raw values as read from the command line, before any rule is applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentValues {
    pub init: bool,
    pub bid: Option<i64>,
    pub cve: Option<String>,
    pub product: Option<String>,
    pub product_version: Option<String>,
    pub only_check: bool,
}

impl ArgumentValues {
    /// Whether a field was given on the command line
    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Init => self.init,
            Field::Bid => self.bid.is_some(),
            Field::Cve => self.cve.is_some(),
            Field::Product => self.product.is_some(),
            Field::ProductVersion => self.product_version.is_some(),
            Field::OnlyCheck => self.only_check,
        }
    }

    /// True when none of the six fields is set
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| !self.is_set(*f))
    }

    /// True when any field other than `field` is set
    pub fn has_others_than(&self, field: Field) -> bool {
        Field::ALL
            .iter()
            .any(|f| *f != field && self.is_set(*f))
    }
}

/// A product-centric query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub product: String,
    pub version: Option<String>,
    pub only_check: bool,
}

/// What the caller should do with a valid invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Drop and rebuild the local database
    Init,
    /// Look up products affected by a CVE
    Cve(String),
    /// Look up products affected by a BugTraq id
    Bid(u64),
    /// Look up vulnerabilities of a product
    Product(ProductQuery),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Init => write!(f, "init"),
            Mode::Cve(id) => write!(f, "cve {}", id),
            Mode::Bid(id) => write!(f, "bid {}", id),
            Mode::Product(query) => {
                write!(f, "product {}", query.product)?;
                if let Some(version) = &query.version {
                    write!(f, " {}", version)?;
                }
                if query.only_check {
                    write!(f, " (only check)")?;
                }
                Ok(())
            }
        }
    }
}

/// A validated invocation
///
/// Only [`crate::args::validate`] builds one, so every value of this type
/// satisfies the combination and format rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    values: ArgumentValues,
    mode: Mode,
}

impl ParsedArguments {
    pub(crate) fn new(values: ArgumentValues, mode: Mode) -> Self {
        ParsedArguments { values, mode }
    }

    /// The resolved mode
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Whether `--init` was requested
    pub fn is_initialization_required(&self) -> bool {
        self.values.init
    }

    /// Whether `--only_check` was requested
    pub fn is_only_product_check(&self) -> bool {
        self.values.only_check
    }

    pub fn cve(&self) -> Option<&str> {
        self.values.cve.as_deref()
    }

    pub fn bid(&self) -> Option<i64> {
        self.values.bid
    }

    pub fn product(&self) -> Option<&str> {
        self.values.product.as_deref()
    }

    pub fn product_version(&self) -> Option<&str> {
        self.values.product_version.as_deref()
    }
}
