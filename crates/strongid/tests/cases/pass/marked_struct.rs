// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

// The marker is inert: the annotated item must compile and stay usable
// exactly as written.

use strongid::strong_id;

#[strong_id(Ulid)]
pub struct User {
    pub username: String,
}

fn main() {
    let user = User {
        username: "ada".to_string(),
    };

    assert_eq!(user.username, "ada");
}
