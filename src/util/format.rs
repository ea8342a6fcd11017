// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a result count for the status line.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_count(1), "1 result");
/// assert_eq!(format_count(50), "50 results");
/// ```
pub(crate) fn format_count(count: usize) -> String {
    match count {
        1 => "1 result".to_string(),
        n => format!("{} results", n),
    }
}

/// Shortens `text` to at most `width` characters, marking the cut with an
/// ellipsis.
///
/// Card rows are a single line, so long titles and URLs are cut rather than
/// wrapped.
pub(crate) fn ellipsize(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    match width {
        0 => String::new(),
        _ => {
            let mut out: String = text.chars().take(width - 1).collect();
            out.push('…');
            out
        }
    }
}
