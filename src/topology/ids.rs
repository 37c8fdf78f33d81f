use std::fmt;

/// Identifier of a map object (a solid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u64);

/// Identifier of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(u64);

impl ObjectId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FaceId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "face#{}", self.0)
    }
}

/// Issues monotonically increasing object and face identifiers.
///
/// One allocator belongs to one editing session and is passed by `&mut` into
/// every generation call. Identifiers are never reused; running out of them
/// is a programming error and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next_object: u64,
    next_face: u64,
}

impl IdAllocator {
    /// Creates an allocator whose first identifiers are `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1, 1)
    }

    /// Creates an allocator continuing after identifiers already in use,
    /// e.g. those of a document loaded from disk.
    #[must_use]
    pub fn starting_at(next_object: u64, next_face: u64) -> Self {
        Self {
            next_object,
            next_face,
        }
    }

    /// Issues the next object identifier.
    ///
    /// # Panics
    ///
    /// Panics if the object identifier space is exhausted.
    pub fn next_object_id(&mut self) -> ObjectId {
        let id = self.next_object;
        self.next_object = id
            .checked_add(1)
            .unwrap_or_else(|| panic!("object id space exhausted at {id}"));
        ObjectId(id)
    }

    /// Issues the next face identifier.
    ///
    /// # Panics
    ///
    /// Panics if the face identifier space is exhausted.
    pub fn next_face_id(&mut self) -> FaceId {
        let id = self.next_face;
        self.next_face = id
            .checked_add(1)
            .unwrap_or_else(|| panic!("face id space exhausted at {id}"));
        FaceId(id)
    }

    /// The object identifier the next call to [`Self::next_object_id`] returns.
    #[must_use]
    pub fn peek_object_id(&self) -> ObjectId {
        ObjectId(self.next_object)
    }

    /// The face identifier the next call to [`Self::next_face_id`] returns.
    #[must_use]
    pub fn peek_face_id(&self) -> FaceId {
        FaceId(self.next_face)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
