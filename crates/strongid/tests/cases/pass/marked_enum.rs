// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

// Enums are valid marker targets, and the backing type may be spelled
// as a qualified path.

use strongid::strong_id;

#[strong_id(uuid::Uuid)]
pub enum Invoice {
    Draft,
    Issued { number: u64 },
}

fn main() {
    let invoice = Invoice::Issued { number: 7 };

    match invoice {
        Invoice::Issued { number } => assert_eq!(number, 7),
        Invoice::Draft => unreachable!(),
    }
}
