use serde::{Deserialize, Serialize};

use crate::point::TouchPoint;

pub const MAX_CONTACTS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPhase {
    Down,
    Move,
    Up,
}

impl ContactPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Move => "move",
            Self::Up => "up",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "down" => Some(Self::Down),
            "move" => Some(Self::Move),
            "up" => Some(Self::Up),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub phase: ContactPhase,
    pub point: TouchPoint,
}

impl Contact {
    pub const fn new(phase: ContactPhase, x: i32, y: i32) -> Self {
        Self {
            phase,
            point: TouchPoint::new(x, y),
        }
    }
}

/// One normalized input frame: up to two contacts, the first being primary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactFrame {
    contact_count: u8,
    contacts: [Option<Contact>; MAX_CONTACTS],
}

impl ContactFrame {
    pub const fn empty() -> Self {
        Self {
            contact_count: 0,
            contacts: [None, None],
        }
    }

    pub const fn single(primary: Contact) -> Self {
        Self {
            contact_count: 1,
            contacts: [Some(primary), None],
        }
    }

    pub const fn pair(primary: Contact, secondary: Contact) -> Self {
        Self {
            contact_count: 2,
            contacts: [Some(primary), Some(secondary)],
        }
    }

    /// Builds a frame from a contact list. Contacts past the second are
    /// dropped since only two are tracked.
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        match contacts {
            [] => Self::empty(),
            [primary] => Self::single(*primary),
            [primary, secondary, ..] => Self::pair(*primary, *secondary),
        }
    }

    pub const fn contact_count(&self) -> u8 {
        self.contact_count
    }

    pub const fn is_empty(&self) -> bool {
        self.contact_count == 0
    }

    pub const fn primary(&self) -> Option<Contact> {
        self.contacts[0]
    }

    pub const fn secondary(&self) -> Option<Contact> {
        self.contacts[1]
    }
}
