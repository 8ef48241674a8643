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

// Number guessing game: one session, one secret, a bounded number of attempts

pub mod guess;
pub mod input;
pub mod messages;
pub mod rules;
pub mod runner;
pub mod session;

pub use guess::Guess;
pub use input::{GuessSource, TerminalSource};
pub use runner::{play, run_session, SessionEnd};
pub use session::{GuessSession, Outcome, SessionState};
