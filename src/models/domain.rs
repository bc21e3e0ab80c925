//! Domain profiles: the library and pet adoption flavours of the service

use serde::{Deserialize, Serialize};

use super::item::Item;
use super::owner::Owner;

/// Which of the two lending domains the server speaks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    #[default]
    Library,
    PetAdoption,
}

impl Domain {
    /// Route segment for the item collection
    pub fn item_collection(&self) -> &'static str {
        match self {
            Domain::Library => "books",
            Domain::PetAdoption => "pets",
        }
    }

    /// Route segment for the owner collection
    pub fn owner_collection(&self) -> &'static str {
        match self {
            Domain::Library => "users",
            Domain::PetAdoption => "adopters",
        }
    }

    /// Route segment for claiming an item
    pub fn claim_action(&self) -> &'static str {
        match self {
            Domain::Library => "checkout",
            Domain::PetAdoption => "adopt",
        }
    }

    /// Human readable singular item label
    pub fn item_label(&self) -> &'static str {
        match self {
            Domain::Library => "Book",
            Domain::PetAdoption => "Pet",
        }
    }

    /// Whether a successful delete answers with a confirmation body
    /// (library) or an empty 204 (pet adoption)
    pub fn delete_returns_body(&self) -> bool {
        matches!(self, Domain::Library)
    }

    /// Fixed data set the store is reset to on startup
    pub fn seed(&self) -> (Vec<Item>, Vec<Owner>) {
        match self {
            Domain::Library => (
                vec![
                    item(1, "1984", "George Orwell", 3, true),
                    item(2, "Brave New World", "Aldous Huxley", 5, true),
                    item(3, "Fahrenheit 451", "Ray Bradbury", 4, true),
                    item(4, "The Catcher in the Rye", "J.D. Salinger", 2, true),
                    item(5, "To Kill a Mockingbird", "Harper Lee", 6, true),
                ],
                vec![
                    owner(1, "Alice", "alice@example.com", &[2, 4, 5]),
                    owner(2, "Bob", "bob@example.com", &[1, 3]),
                    owner(3, "Charlie", "charlie@example.com", &[1]),
                    owner(4, "Dave", "dave@example.com", &[2, 3, 4, 5]),
                    owner(5, "Eve", "eve@example.com", &[4]),
                ],
            ),
            Domain::PetAdoption => (
                vec![
                    item(1, "Buddy", "Dog", 3, true),
                    item(2, "Mittens", "Cat", 2, false),
                    item(3, "Goldie", "Fish", 1, true),
                    item(4, "Snowball", "Rabbit", 4, true),
                    item(5, "Luna", "Cat", 3, false),
                ],
                vec![
                    owner(1, "Jane Doe", "jane@example.com", &[2]),
                    owner(2, "John Smith", "john@example.com", &[5]),
                ],
            ),
        }
    }
}

fn item(id: i64, name: &str, category: &str, quantity: i64, available: bool) -> Item {
    Item {
        id,
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        available,
    }
}

fn owner(id: i64, name: &str, email: &str, held: &[i64]) -> Owner {
    Owner {
        id,
        name: name.to_string(),
        email: email.to_string(),
        held_item_ids: held.to_vec(),
    }
}
