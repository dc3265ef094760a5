//! Set of useful parser combinators

// nom parser combinators
use nom::character::complete::{alpha1, space0};
use nom::sequence::tuple;
use nom::{self, IResult};

/// Parse a decay time into its value and unit text
///
/// Expects `<value><optional spaces><unit>` where the value is an unsigned
/// integer and the unit is any run of letters, e.g. `10y`, `3 days`, `60 M`.
/// Leading and trailing whitespace is ignored.
///
/// The unit text is returned as-is for interpretation by the caller.
pub(crate) fn decay_time(i: &str) -> IResult<&str, (u64, &str)> {
    let (i, (_, value, _, unit, _)) = tuple((space0, unsigned, space0, alpha1, space0))(i)?;
    Ok((i, (value, unit)))
}

/// Get an unsigned integer value
fn unsigned(i: &str) -> IResult<&str, u64> {
    nom::character::complete::u64(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_time_parts() {
        assert_eq!(decay_time("10y"), Ok(("", (10, "y"))));
        assert_eq!(decay_time(" 3 days "), Ok(("", (3, "days"))));
        assert_eq!(decay_time("60 M rest"), Ok(("rest", (60, "M"))));
    }

    #[test]
    fn decay_time_needs_both_parts() {
        assert!(decay_time("years").is_err());
        assert!(decay_time("10").is_err());
        assert!(decay_time("-10 y").is_err());
    }
}
