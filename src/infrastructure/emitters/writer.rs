//! Indented text writer backed by pooled buffers
//!
//! Each emission acquires its own buffer from a thread-local pool and
//! returns it on drop, so concurrent emissions never share a builder and
//! repeated passes reuse allocations.

use std::cell::RefCell;
use std::fmt::{self, Write as _};

const INDENT: &str = "    ";
const MAX_POOLED: usize = 8;
const INITIAL_CAPACITY: usize = 1024;

thread_local! {
    static POOL: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Line-oriented writer with brace-scoped indentation
pub struct IndentedWriter {
    buf: String,
    depth: usize,
}

impl IndentedWriter {
    /// Take a cleared buffer from the pool, or allocate one.
    pub fn acquire() -> Self {
        let buf = POOL
            .try_with(|pool| pool.borrow_mut().pop())
            .ok()
            .flatten()
            .unwrap_or_else(|| String::with_capacity(INITIAL_CAPACITY));
        Self { buf, depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write one indented line.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.line_fmt(format_args!("{}", text))
    }

    /// Write one indented, formatted line without an intermediate String.
    pub fn line_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        // writing into a String cannot fail
        let _ = self.buf.write_fmt(args);
        self.buf.push('\n');
        self
    }

    /// Write an empty line (never indented).
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// `header {` and one level deeper.
    pub fn open(&mut self, header: fmt::Arguments<'_>) -> &mut Self {
        self.line_fmt(format_args!("{} {{", header));
        self.indent()
    }

    /// One level shallower and `}`.
    pub fn close(&mut self) -> &mut Self {
        self.dedent();
        self.line("}")
    }

    /// Copy out the text; the buffer itself goes back to the pool.
    pub fn finish(self) -> String {
        self.buf.as_str().to_owned()
    }
}

impl Drop for IndentedWriter {
    fn drop(&mut self) {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        let _ = POOL.try_with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < MAX_POOLED {
                pool.push(buf);
            }
        });
    }
}
