use std::ops::Index;

/* ---------------------------------- Index --------------------------------- */

pub use crate::new_key_type;

pub trait IndexLike: Clone + Copy + Eq + std::hash::Hash {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
}

/* ---------------------------------- Arena --------------------------------- */

/// An append-only arena; keys are handed out in allocation order and never reused.
#[derive(Debug, Clone)]
pub struct ArenaDense<Id, T> {
    vec: Vec<T>,
    _marker: std::marker::PhantomData<Id>,
}

impl<Id, T> Default for ArenaDense<Id, T> {
    fn default() -> Self {
        ArenaDense { vec: Vec::new(), _marker: std::marker::PhantomData }
    }
}

impl<Id: IndexLike, T> ArenaDense<Id, T> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn alloc(&mut self, val: T) -> Id {
        let id = Id::new(self.vec.len());
        self.vec.push(val);
        id
    }
    pub fn get(&self, id: &Id) -> Option<&T> {
        self.vec.get(id.index())
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> + '_ {
        self.vec.iter().enumerate().map(|(idx, val)| (Id::new(idx), val))
    }
}

impl<Id: IndexLike, T> Index<&Id> for ArenaDense<Id, T> {
    type Output = T;
    fn index(&self, id: &Id) -> &Self::Output {
        &self.vec[id.index()]
    }
}

#[macro_export]
macro_rules! new_key_type {
    ( $(#[$outer:meta])* $vis:vis struct $name:ident ; $($rest:tt)* ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $vis struct $name(usize);

        impl $crate::arena::IndexLike for $name {
            fn new(idx: usize) -> Self {
                Self(idx)
            }
            fn index(&self) -> usize {
                self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        $crate::new_key_type!($($rest)*);
    };

    () => {}
}
