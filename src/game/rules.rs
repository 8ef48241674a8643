// Copyright 2025 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::ops::RangeInclusive;

/// Smallest number the secret can be
pub const MIN_SECRET: u32 = 1;

/// Largest number the secret can be
pub const MAX_SECRET: u32 = 50;

/// Guesses allowed per session, malformed ones included
pub const MAX_ATTEMPTS: u32 = 10;

/// Closed range the secret is drawn from
pub fn secret_range() -> RangeInclusive<u32> {
	MIN_SECRET..=MAX_SECRET
}
