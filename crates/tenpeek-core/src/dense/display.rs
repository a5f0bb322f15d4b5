//! Plain rendering of dense arrays
//!
//! Arrays at or below the print threshold are shown in full, numpy style:
//! nested brackets, right-aligned cells, lines wrapped at `line_width`. Above the
//! threshold each axis keeps `edge_items` entries on either side of a `...`.

use super::types::DenseND;
use crate::dtype::Element;
use crate::print_options::PrintOptions;

/// Separators used between cells and between rows.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Layout {
    pub separator: &'static str,
    pub row_separator: &'static str,
}

impl Layout {
    /// `[[1 2]\n [3 4]]`
    pub(crate) const NUMPY: Layout = Layout {
        separator: " ",
        row_separator: "",
    };

    /// `[[1, 2],\n [3, 4]]`
    pub(crate) const TORCH: Layout = Layout {
        separator: ", ",
        row_separator: ",",
    };
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Index(usize),
    Ellipsis,
}

struct Renderer<'a> {
    shape: &'a [usize],
    strides: Vec<usize>,
    cells: &'a [String],
    options: &'a PrintOptions,
    layout: Layout,
    indent: usize,
    summarize: bool,
    width: usize,
}

/// Render row-major `cells` laid out as `shape`.
///
/// `indent` is the column at which the outermost `[` starts, so wrapped lines
/// line up under it when the caller prints a prefix such as `tensor(`.
pub(crate) fn render_nested(
    shape: &[usize],
    cells: &[String],
    options: &PrintOptions,
    layout: Layout,
    indent: usize,
) -> String {
    if shape.is_empty() {
        return cells.first().cloned().unwrap_or_default();
    }
    if cells.is_empty() {
        return "[]".to_string();
    }

    let mut strides = vec![1; shape.len()];
    for axis in (0..shape.len() - 1).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }

    let renderer = Renderer {
        shape,
        strides,
        cells,
        options,
        layout,
        indent,
        summarize: cells.len() > options.threshold,
        width: cells.iter().map(|c| c.len()).max().unwrap_or(0),
    };
    let mut out = String::new();
    renderer.render_axis(&mut out, 0, 0);
    out
}

impl Renderer<'_> {
    fn slots(&self, len: usize) -> Vec<Slot> {
        let edge = self.options.edge_items;
        if self.summarize && len > 2 * edge {
            (0..edge)
                .map(Slot::Index)
                .chain(std::iter::once(Slot::Ellipsis))
                .chain((len - edge..len).map(Slot::Index))
                .collect()
        } else {
            (0..len).map(Slot::Index).collect()
        }
    }

    fn render_axis(&self, out: &mut String, depth: usize, offset: usize) {
        let pad = self.indent + depth + 1;
        out.push('[');

        if depth + 1 == self.shape.len() {
            let separator = self.layout.separator;
            let mut column = pad;
            for (n, slot) in self.slots(self.shape[depth]).into_iter().enumerate() {
                let cell = match slot {
                    Slot::Index(i) => format!("{:>width$}", self.cells[offset + i], width = self.width),
                    Slot::Ellipsis => "...".to_string(),
                };
                if n > 0 {
                    // +1 leaves room for the closing bracket
                    if column + separator.len() + cell.len() + 1 > self.options.line_width {
                        out.push_str(separator.trim_end());
                        out.push('\n');
                        out.push_str(&" ".repeat(pad));
                        column = pad;
                    } else {
                        out.push_str(separator);
                        column += separator.len();
                    }
                }
                out.push_str(&cell);
                column += cell.len();
            }
        } else {
            let blank_lines = self.shape.len() - depth - 2;
            for (n, slot) in self.slots(self.shape[depth]).into_iter().enumerate() {
                if n > 0 {
                    out.push_str(self.layout.row_separator);
                    out.push('\n');
                    for _ in 0..blank_lines {
                        out.push('\n');
                    }
                    out.push_str(&" ".repeat(pad));
                }
                match slot {
                    Slot::Index(i) => self.render_axis(out, depth + 1, offset + i * self.strides[depth]),
                    Slot::Ellipsis => out.push_str("..."),
                }
            }
        }

        out.push(']');
    }
}

impl<T: Element> DenseND<T> {
    pub(crate) fn cells(&self, options: &PrintOptions) -> Vec<String> {
        self.iter().map(|x| x.format_cell(options)).collect()
    }

    /// Render the array numpy style.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::{DenseND, PrintOptions};
    ///
    /// let array = DenseND::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
    /// assert_eq!(array.render(&PrintOptions::default()), "[[1 2]\n [3 4]]");
    /// ```
    pub fn render(&self, options: &PrintOptions) -> String {
        render_nested(self.shape(), &self.cells(options), options, Layout::NUMPY, 0)
    }
}
