//! Argument validation
//!
//! Rules are checked in a fixed order and the first violation wins. A cve
//! combined with a bid is therefore reported as a `--cve` conflict.

use crate::args::types::{ArgumentValues, Field, Mode, ParsedArguments, ProductQuery};
use crate::error::{ArgsError, ArgsResult};
use regex::Regex;
use std::sync::OnceLock;

/// Full-string CVE identifier pattern, e.g. `CVE-2002-1234`
const CVE_PATTERN: &str = r"^CVE-[0-9]{4}-[0-9]{4}$";

fn cve_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CVE_PATTERN).expect("CVE pattern is a valid regex"))
}

/// Check whether a string is a well-formed CVE identifier
pub fn is_valid_cve(cve: &str) -> bool {
    cve_regex().is_match(cve)
}

/// Validate raw values and build the read-only result
pub fn validate(values: ArgumentValues) -> ArgsResult<ParsedArguments> {
    let mode = resolve_mode(&values)?;
    Ok(ParsedArguments::new(values, mode))
}

/// Resolve the mode of an invocation
pub fn resolve_mode(values: &ArgumentValues) -> ArgsResult<Mode> {
    if values.is_empty() {
        return Err(ArgsError::MissingArguments);
    }

    if values.init {
        require_alone(values, Field::Init)?;
        return Ok(Mode::Init);
    }

    if let Some(cve) = &values.cve {
        require_alone(values, Field::Cve)?;
        if !is_valid_cve(cve) {
            return Err(ArgsError::InvalidFormat(cve.clone()));
        }
        return Ok(Mode::Cve(cve.clone()));
    }

    if let Some(bid) = values.bid {
        require_alone(values, Field::Bid)?;
        return u64::try_from(bid)
            .ok()
            .filter(|id| *id > 0)
            .map(Mode::Bid)
            .ok_or(ArgsError::InvalidRange(bid));
    }

    match &values.product {
        Some(product) => Ok(Mode::Product(ProductQuery {
            product: product.clone(),
            version: values.product_version.clone(),
            only_check: values.only_check,
        })),
        // Only product_version or only_check can be left at this point
        None => Err(ArgsError::MissingDependency),
    }
}

fn require_alone(values: &ArgumentValues, field: Field) -> ArgsResult<()> {
    if values.has_others_than(field) {
        Err(ArgsError::Conflicting(field))
    } else {
        Ok(())
    }
}
