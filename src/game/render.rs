//! Plain-text picture of the pegs for console play

use crate::core::PegId;
use crate::pegs::Pegs;

/// Render the pegs as columns, tallest stack first
///
/// ```text
///    1     .     .
///    2     .     .
///    3     .     .
/// ------+-----+-----
///  Rod 1 Rod 2 Rod 3
/// ```
pub fn render_pegs(pegs: &Pegs) -> String {
    let height = pegs.iter().map(|peg| peg.len()).max().unwrap_or(0);
    let mut out = String::new();

    for level in (0..height).rev() {
        for peg in pegs.iter() {
            match peg.discs.get(level) {
                Some(disc) => out.push_str(&format!("{:^6}", disc.size())),
                None => out.push_str(&format!("{:^6}", ".")),
            }
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    out.push_str("------+-----+-----\n");
    for peg in PegId::ALL {
        out.push_str(&format!("{:^6}", format!("Rod {}", peg.rod_number())));
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}
