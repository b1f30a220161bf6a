//! Entry points for a disassembly run.
//!
//! A vector names an address to start decoding at together with the flag
//! state the CPU is known to be in there. The text form has one vector per
//! line:
//!
//! ```text
//! ; address  M      X      label
//! $808000    off    off    Reset
//! 0x80A000   on     on
//! ```

use crate::address::Address;
use crate::text::{content_lines, parse_bool, parse_int, TextError};
use std::fs;
use std::path::Path;

/// One disassembly entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    /// Address to start decoding at
    pub address: Address,

    /// M flag on entry (8-bit accumulator when set)
    pub m_flag: bool,

    /// X flag on entry (8-bit index registers when set)
    pub x_flag: bool,

    /// Name given to the label at `address`
    pub label: Option<String>,

    /// Bank used to resolve 16-bit data addresses
    pub data_bank: u8,
}

impl Vector {
    /// Create a vector whose data bank is the bank of `address`.
    pub fn new(address: Address, m_flag: bool, x_flag: bool) -> Self {
        Self {
            address,
            m_flag,
            x_flag,
            label: None,
            data_bank: address.bank(),
        }
    }

    /// Attach a label name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Override the data bank.
    pub fn with_data_bank(mut self, bank: u8) -> Self {
        self.data_bank = bank;
        self
    }

    /// Parse the whitespace-separated columns of one line.
    ///
    /// `file` and `line` are only used for error reporting.
    pub fn parse_line(text: &str, file: &str, line: usize) -> Result<Self, TextError> {
        let columns: Vec<&str> = text.split_whitespace().collect();
        let error = |column: usize, message: String| TextError::new(file, line, column, message);

        if !(3..=4).contains(&columns.len()) {
            return Err(error(
                (columns.len() + 1).min(5),
                format!("expected 3 or 4 columns, found {}", columns.len()),
            ));
        }

        let address = parse_int(columns[0])
            .filter(|value| *value <= 0xFF_FFFF)
            .ok_or_else(|| error(1, format!("invalid address '{}'", columns[0])))?;
        let m_flag = parse_bool(columns[1])
            .ok_or_else(|| error(2, format!("invalid M flag '{}'", columns[1])))?;
        let x_flag = parse_bool(columns[2])
            .ok_or_else(|| error(3, format!("invalid X flag '{}'", columns[2])))?;

        let vector = Self::new(Address::from_linear(address), m_flag, x_flag);
        Ok(match columns.get(3) {
            Some(label) => vector.with_label(*label),
            None => vector,
        })
    }
}

/// Vectors in the order they will be processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorList {
    vectors: Vec<Vector>,
}

impl VectorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a vector list from text.
    ///
    /// # Examples
    ///
    /// ```
    /// use disasm816::{Address, VectorList};
    ///
    /// let text = "; entry points\n$008000 on on Reset\n0x009000 no no\n";
    /// let vectors = VectorList::parse(text, "vectors.txt").unwrap();
    ///
    /// assert_eq!(vectors.len(), 2);
    /// assert_eq!(vectors[0].address, Address::new(0x00, 0x8000));
    /// assert_eq!(vectors[0].label.as_deref(), Some("Reset"));
    /// assert!(!vectors[1].m_flag);
    /// ```
    ///
    /// # Errors
    ///
    /// [`TextError`] for the first malformed line.
    pub fn parse(text: &str, file: &str) -> Result<Self, TextError> {
        let vectors = content_lines(text)
            .map(|(line, content)| Vector::parse_line(content, file, line))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("{} vectors in {}", vectors.len(), file);
        Ok(Self { vectors })
    }

    /// Read and parse a vector list file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text, &path.display().to_string())?)
    }

    /// Queue a vector after the existing ones.
    pub fn push(&mut self, vector: Vector) {
        self.vectors.push(vector);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
        self.vectors.iter()
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl std::ops::Index<usize> for VectorList {
    type Output = Vector;

    fn index(&self, index: usize) -> &Vector {
        &self.vectors[index]
    }
}

impl FromIterator<Vector> for VectorList {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for VectorList {
    type Item = Vector;
    type IntoIter = std::vec::IntoIter<Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.into_iter()
    }
}

impl<'a> IntoIterator for &'a VectorList {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}
