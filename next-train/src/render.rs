//! Text and JSON output for the command line.

use crate::departures::DepartureBoard;

/// Column headings of the departure table.
const BOARD_COLUMNS: [&str; 6] = [
    "stop_id",
    "trip_id",
    "arrival_time",
    "departure_time",
    "route_id",
    "trip_headsign",
];

/// Render a departure board as a header plus fixed-width table.
pub fn render_board(board: &DepartureBoard) -> String {
    let mut out = format!(
        "Station '{}' found with stop IDs: {:?}\n",
        board.station, board.stop_ids
    );

    if board.is_empty() {
        out.push_str(&format!(
            "No upcoming trains at {} for the rest of today.\n",
            board.station
        ));
        return out;
    }

    out.push_str(&format!("Next trains at {}:\n", board.station));
    let rows: Vec<Vec<String>> = board
        .departures
        .iter()
        .map(|d| {
            vec![
                d.stop_id.clone(),
                d.trip_id.clone(),
                d.arrival_time.to_string(),
                d.departure_time.clone(),
                d.route_id.clone(),
                d.trip_headsign.clone(),
            ]
        })
        .collect();
    out.push_str(&format_table(&BOARD_COLUMNS, &rows));
    out
}

/// Render a departure board as pretty-printed JSON.
pub fn render_json(board: &DepartureBoard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(board)
}

/// Lay out rows under headers, each column padded to its widest cell.
///
/// Every line, including the last, ends with a newline. Trailing padding
/// is trimmed.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, headers.iter().copied());
    for row in rows {
        push_row(&mut out, &widths, row.iter().map(String::as_str));
    }
    out
}

fn push_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let line = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
