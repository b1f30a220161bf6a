//! Labels attached to referenced addresses.
//!
//! A label is created the first time anything refers to its address and
//! accumulates roles as more references are found. It is either a code
//! label or a data label, never both.

use crate::address::Address;
use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;

/// What a label points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelClass {
    Code,
    Data,
}

impl fmt::Display for LabelClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LabelClass::Code => f.write_str("code"),
            LabelClass::Data => f.write_str("data"),
        }
    }
}

/// Errors raised while updating labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// The label is already classified the other way.
    #[error("label at {address} is already {existing}, cannot mark it as {requested}")]
    ClassificationConflict {
        address: Address,
        existing: LabelClass,
        requested: LabelClass,
    },
}

/// A named or unnamed location referenced by the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    address: Address,
    name: Option<String>,
    branch: bool,
    jump: bool,
    call: bool,
    class: Option<LabelClass>,
}

impl Label {
    /// Create an unnamed, unclassified label.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            name: None,
            branch: false,
            jump: false,
            call: false,
            class: None,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Explicit name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the explicit name, returning the previous one.
    pub fn set_name(&mut self, name: impl Into<String>) -> Option<String> {
        self.name.replace(name.into())
    }

    /// Name used in listings: the explicit name, or one generated from the
    /// label's role and address.
    ///
    /// # Examples
    ///
    /// ```
    /// use disasm816::{Address, Label};
    ///
    /// let mut label = Label::new(Address::new(0x80, 0x8000));
    /// assert_eq!(label.display_name(), "LAB_808000");
    ///
    /// label.mark_call();
    /// assert_eq!(label.display_name(), "FUN_808000");
    ///
    /// label.set_name("Reset");
    /// assert_eq!(label.display_name(), "Reset");
    /// ```
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        let prefix = if self.call {
            "FUN"
        } else if self.is_data() {
            "DAT"
        } else {
            "LAB"
        };
        format!("{}_{:06X}", prefix, self.address.linear())
    }

    pub fn is_branch_target(&self) -> bool {
        self.branch
    }

    pub fn is_jump_target(&self) -> bool {
        self.jump
    }

    pub fn is_call_target(&self) -> bool {
        self.call
    }

    pub fn mark_branch(&mut self) {
        self.branch = true;
    }

    pub fn mark_jump(&mut self) {
        self.jump = true;
    }

    pub fn mark_call(&mut self) {
        self.call = true;
    }

    /// Current classification, if any.
    pub fn class(&self) -> Option<LabelClass> {
        self.class
    }

    pub fn is_code(&self) -> bool {
        self.class == Some(LabelClass::Code)
    }

    pub fn is_data(&self) -> bool {
        self.class == Some(LabelClass::Data)
    }

    /// Mark the label as code or data.
    ///
    /// Repeating the current classification is a no-op.
    ///
    /// # Errors
    ///
    /// [`LabelError::ClassificationConflict`] if the label already has the
    /// other classification.
    pub fn classify(&mut self, class: LabelClass) -> Result<(), LabelError> {
        match self.class {
            Some(existing) if existing != class => Err(LabelError::ClassificationConflict {
                address: self.address,
                existing,
                requested: class,
            }),
            _ => {
                self.class = Some(class);
                Ok(())
            }
        }
    }
}

/// Labels keyed by address, one per address, iterated in address order.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    labels: BTreeMap<Address, Label>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label at `address`, created if it does not exist yet.
    pub fn label_for(&mut self, address: Address) -> &mut Label {
        match self.labels.entry(address) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::trace!("new label at {}", address);
                entry.insert(Label::new(address))
            }
        }
    }

    /// Label at `address`, marked as a branch target.
    pub fn label_for_branch(&mut self, address: Address) -> &mut Label {
        let label = self.label_for(address);
        label.mark_branch();
        label
    }

    /// Label at `address`, marked as a jump target.
    pub fn label_for_jump(&mut self, address: Address) -> &mut Label {
        let label = self.label_for(address);
        label.mark_jump();
        label
    }

    /// Label at `address`, marked as a subroutine entry.
    pub fn label_for_call(&mut self, address: Address) -> &mut Label {
        let label = self.label_for(address);
        label.mark_call();
        label
    }

    /// Existing label at `address`.
    pub fn get(&self, address: Address) -> Option<&Label> {
        self.labels.get(&address)
    }

    /// Labels in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.values()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
