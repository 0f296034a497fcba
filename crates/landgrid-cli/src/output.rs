//! Line formats for minted assignments.

use std::io::{self, Write};

use landgrid_spiral::{Assignment, RingGeometry};

/// Write one `token x y layer` line per assignment.
pub fn write_table<W: Write>(out: &mut W, assignments: &[Assignment]) -> io::Result<()> {
    for a in assignments {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            a.token_id.value(),
            a.coord.x,
            a.coord.y,
            a.layer
        )?;
    }
    Ok(())
}

/// Write one JSON object per line.
pub fn write_json_lines<W: Write>(out: &mut W, assignments: &[Assignment]) -> io::Result<()> {
    for a in assignments {
        serde_json::to_writer(&mut *out, a)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write `layer steps cumulative` for layers `1..=count`. Stops with
/// `InvalidInput` at the first layer whose cumulative total overflows.
pub fn write_layers<W: Write, G: RingGeometry>(
    out: &mut W,
    geometry: &G,
    count: u64,
) -> io::Result<()> {
    for layer in 1..=count {
        let total = geometry.tokens_through_layer(layer).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("tokens through layer {layer} overflow u64"),
            )
        })?;
        writeln!(
            out,
            "{}\t{}\t{}",
            layer,
            geometry.max_steps_in_layer(layer),
            total
        )?;
    }
    Ok(())
}
