//! Waitlist record: a student with range-validated GPA and unit load.

use core::fmt;
use std::cmp::Ordering;

use thiserror::Error;

/// Highest GPA a student record accepts.
pub const MAX_GPA: f32 = 4.0;
/// Highest number of units a student record accepts.
pub const MAX_UNITS: u32 = 150;

/// Validation failures raised by [`Student::new`] and the fallible setters.
///
/// These are the record's own errors; the queue structures never raise them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StudentError {
    /// GPA outside `0.0..=4.0`.
    #[error("gpa {0} is not valid, it must reside between 0.0 and 4.0")]
    GpaOutOfRange(f32),

    /// Units taken outside `0..=150`.
    #[error("units taken {0} is not valid, it must reside between 0 and 150")]
    UnitsOutOfRange(u32),
}

/// A student on the registration waitlist.
///
/// The natural order ranks by GPA alone (total order over the raw `f32` via
/// [`f32::total_cmp`]); queues that want a different policy supply their own
/// comparator. Records are typically queued as `Rc<Student>` so that
/// `contains`/`remove` can match the exact entry by handle identity.
#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    red_id: String,
    email: String,
    gpa: f32,
    units_taken: u32,
}

impl Student {
    /// Creates a record, validating that `gpa` and `units_taken` are within
    /// their permitted ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist_queue::{Student, StudentError};
    ///
    /// let ok = Student::new("Ada", "816000001", "ada@example.edu", 3.9, 96);
    /// assert!(ok.is_ok());
    ///
    /// let bad = Student::new("Bob", "816000002", "bob@example.edu", 4.2, 12);
    /// assert_eq!(bad.unwrap_err(), StudentError::GpaOutOfRange(4.2));
    /// ```
    pub fn new(
        name: impl Into<String>,
        red_id: impl Into<String>,
        email: impl Into<String>,
        gpa: f32,
        units_taken: u32,
    ) -> Result<Student, StudentError> {
        if !(0.0..=MAX_GPA).contains(&gpa) {
            return Err(StudentError::GpaOutOfRange(gpa));
        }
        if units_taken > MAX_UNITS {
            return Err(StudentError::UnitsOutOfRange(units_taken));
        }
        Ok(Student {
            name: name.into(),
            red_id: red_id.into(),
            email: email.into(),
            gpa,
            units_taken,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn red_id(&self) -> &str {
        &self.red_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn gpa(&self) -> f32 {
        self.gpa
    }

    pub fn units_taken(&self) -> u32 {
        self.units_taken
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_red_id(&mut self, red_id: impl Into<String>) {
        self.red_id = red_id.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Updates the GPA, enforcing the same range as construction.
    pub fn set_gpa(&mut self, gpa: f32) -> Result<(), StudentError> {
        if !(0.0..=MAX_GPA).contains(&gpa) {
            return Err(StudentError::GpaOutOfRange(gpa));
        }
        self.gpa = gpa;
        Ok(())
    }

    /// Updates the unit load, enforcing the same range as construction.
    pub fn set_units_taken(&mut self, units_taken: u32) -> Result<(), StudentError> {
        if units_taken > MAX_UNITS {
            return Err(StudentError::UnitsOutOfRange(units_taken));
        }
        self.units_taken = units_taken;
        Ok(())
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.gpa.total_cmp(&other.gpa) == Ordering::Equal
    }
}

impl Eq for Student {}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Student {
    /// Natural order: GPA only.
    fn cmp(&self, other: &Self) -> Ordering {
        self.gpa.total_cmp(&other.gpa)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}   Red ID: {}", self.name, self.red_id)
    }
}
