//! Report rendering.
//!
//! Pure function of the roster into a caller-supplied sink; no ambient
//! stdout. The template is fixed: two blank lines, the banner, then one
//! block per record in entry order with column-aligned labels and a
//! 1-based index.

use std::io::{self, Write};

use crate::record::Roster;

/// The report header line.
pub const BANNER: &str = "===== Student Details =====";

/// Write the full report for `roster` into `out`.
///
/// An empty roster still gets the banner, just no record blocks.
pub fn write_report<W: Write>(roster: &Roster, out: &mut W) -> io::Result<()> {
    write!(out, "\n\n{BANNER}\n")?;
    for (i, record) in roster.iter().enumerate() {
        write!(out, "\nStudent {}\n", i + 1)?;
        writeln!(out, "Name    : {}", record.name)?;
        writeln!(out, "Class   : {}", record.class_number)?;
        writeln!(out, "Address : {}", record.address)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{BoundedText, OverflowPolicy};
    use crate::record::{ADDRESS_MAX, NAME_MAX, StudentRecord};

    fn record(name: &str, class: i32, address: &str) -> StudentRecord {
        StudentRecord {
            name: BoundedText::new(name.into(), NAME_MAX, OverflowPolicy::Reject).unwrap(),
            class_number: class,
            address: BoundedText::new(address.into(), ADDRESS_MAX, OverflowPolicy::Reject).unwrap(),
        }
    }

    fn render(roster: &Roster) -> String {
        let mut out = Vec::new();
        write_report(roster, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_roster_prints_banner_only() {
        let out = render(&Roster::with_expected(0));
        assert_eq!(out, "\n\n===== Student Details =====\n");
    }

    #[test]
    fn test_two_record_report() {
        let mut roster = Roster::with_expected(2);
        roster.push(record("Alice", 5, "MainSt"));
        roster.push(record("Bob", 6, "ParkAve"));

        let expected = "\n\n===== Student Details =====\n\
                        \nStudent 1\n\
                        Name    : Alice\n\
                        Class   : 5\n\
                        Address : MainSt\n\
                        \nStudent 2\n\
                        Name    : Bob\n\
                        Class   : 6\n\
                        Address : ParkAve\n";
        assert_eq!(render(&roster), expected);
    }

    #[test]
    fn test_negative_class_rendered_verbatim() {
        let mut roster = Roster::with_expected(1);
        roster.push(record("Cara", -3, "ElmRd"));
        let out = render(&roster);
        assert!(out.contains("Class   : -3\n"));
    }
}
