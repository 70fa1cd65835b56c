use vessel::{Geometry, HeadType};

const LIQUID: char = '~';

/// One text line of a tank drawing.
#[derive(Debug, Clone, Copy)]
struct Row {
  indent: usize,
  left: char,
  right: char,
  width: usize,
  /// Outline rows never hold liquid and are drawn with this character.
  outline: Option<char>,
}

impl Row {
  const fn inner(indent: usize, left: char, width: usize, right: char) -> Self {
    Self { indent, left, right, width, outline: None }
  }

  const fn outline(indent: usize, left: char, fill: char, width: usize, right: char) -> Self {
    Self { indent, left, right, width, outline: Some(fill) }
  }

  fn draw(&self, filled: bool) -> String {
    let fill = match self.outline {
      Some(c) => c,
      None if filled => LIQUID,
      None => ' ',
    };

    format!(
      "{:indent$}{}{}{}{:indent$}",
      "",
      self.left,
      fill.to_string().repeat(self.width),
      self.right,
      "",
      indent = self.indent,
    )
  }
}

fn rows(geometry: Geometry, head: HeadType) -> Vec<Row> {
  let mut rows = Vec::new();

  match (geometry, head) {
    (Geometry::Vertical, HeadType::Flat) => {
      rows.push(Row::outline(0, '.', '-', 12, '.'));
      rows.extend([Row::inner(0, '|', 12, '|'); 10]);
      rows.push(Row::outline(0, '\'', '-', 12, '\''));
    },
    (Geometry::Vertical, HeadType::Conical) => {
      rows.push(Row::outline(4, '.', '-', 4, '.'));
      rows.push(Row::outline(2, '/', ' ', 8, '\\'));
      rows.extend([Row::inner(0, '|', 12, '|'); 10]);
      rows.push(Row::outline(2, '\\', ' ', 8, '/'));
      rows.push(Row::outline(4, '\'', '-', 4, '\''));
    },
    (Geometry::Horizontal, HeadType::Flat) => {
      rows.push(Row::outline(1, '.', '-', 20, '.'));
      rows.extend([Row::inner(1, '|', 20, '|'); 6]);
      rows.push(Row::outline(1, '\'', '-', 20, '\''));
    },
    (Geometry::Horizontal, HeadType::Conical) => {
      rows.push(Row::outline(1, '.', '-', 20, '.'));
      rows.extend([Row::inner(1, '/', 20, '\\'); 3]);
      rows.extend([Row::inner(1, '\\', 20, '/'); 3]);
      rows.push(Row::outline(1, '\'', '-', 20, '\''));
    },
    (Geometry::Rectangular, _) => {
      rows.push(Row::outline(0, '+', '-', 12, '+'));
      rows.extend([Row::inner(0, '|', 12, '|'); 10]);
      rows.push(Row::outline(0, '+', '-', 12, '+'));
    },
    // Each cap spans a fifth of the height, the cylinder the rest.
    (Geometry::Capsule, _) => {
      rows.push(Row::outline(4, '.', '-', 4, '.'));
      rows.push(Row::inner(2, '/', 8, '\\'));
      rows.push(Row::inner(1, '/', 10, '\\'));
      rows.extend([Row::inner(0, '|', 12, '|'); 6]);
      rows.push(Row::inner(1, '\\', 10, '/'));
      rows.push(Row::inner(2, '\\', 8, '/'));
      rows.push(Row::outline(4, '\'', '-', 4, '\''));
    },
  }

  rows
}

/// Draws the tank with liquid up to `percentage` and marks the level.
///
/// Only cylinders show their head type. The percentage is spread linearly
/// over all rows able to hold liquid, so a capsule fills its bottom cap,
/// the cylinder and then its top cap.
pub fn render(geometry: Geometry, head: HeadType, percentage: f64) -> Vec<String> {
  let rows = rows(geometry, head);
  let inner_rows = rows.iter().filter(|row| row.outline.is_none()).count();

  let fraction = if percentage.is_finite() { (percentage / 100.0).clamp(0.0, 1.0) } else { 0.0 };
  let filled_rows = (fraction * inner_rows as f64).round() as usize;

  // Walk bottom-up so liquid settles at the bottom.
  let mut lines = Vec::with_capacity(rows.len());
  let mut remaining = filled_rows;
  let mut marker = None;

  for row in rows.iter().rev() {
    let filled = row.outline.is_none() && remaining > 0;

    if filled {
      remaining -= 1;

      if remaining == 0 {
        marker = Some(lines.len());
      }
    }

    lines.push(row.draw(filled));
  }

  let marker = marker.unwrap_or(0);
  lines[marker].push_str(&format!(" <- {:.1}%", percentage));

  lines.reverse();
  lines
}
