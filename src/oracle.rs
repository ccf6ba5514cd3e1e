//! The yes/no/maybe oracle that decides which stone is placed each turn.
//!
//! The real [OracleClient] asks a public HTTP endpoint (yesno.wtf by default) and never
//! fails: any network or parse problem falls back to a uniformly random yes/no answer.
//! [RandomOracle] plays offline, [ScriptedOracle] replays a fixed directive sequence.

use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{Debug, Formatter};
use std::io::Read;
use std::time::Duration;

use rand::Rng;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::board::Stone;

/// The oracle's categorical answer, after synonym bucketing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Answer {
    Yes,
    No,
    Maybe,
}

impl Answer {
    /// Bucket a raw answer into one of the three categories, case-insensitively.
    /// Returns `None` for anything outside the known vocabulary.
    pub fn from_text(text: &str) -> Option<Answer> {
        match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "yeah" | "yep" | "definitely" | "absolutely" => Some(Answer::Yes),
            "no" | "nope" | "nah" | "negative" => Some(Answer::No),
            "maybe" | "perhaps" | "possibly" => Some(Answer::Maybe),
            _ => None,
        }
    }
}

/// What the current turn has to do with its placement.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Directive {
    PlaceYes,
    PlaceNo,
    PlaceMaybe,
}

impl Directive {
    pub fn from_answer(answer: Answer) -> Directive {
        match answer {
            Answer::Yes => Directive::PlaceYes,
            Answer::No => Directive::PlaceNo,
            Answer::Maybe => Directive::PlaceMaybe,
        }
    }

    /// The stone color this directive forces onto the board, for the given player.
    pub fn mandated_stone(self, player: Stone) -> Stone {
        match self {
            Directive::PlaceYes => Stone::Yes,
            Directive::PlaceNo => Stone::No,
            Directive::PlaceMaybe => player,
        }
    }

    pub fn is_maybe(self) -> bool {
        self == Directive::PlaceMaybe
    }
}

/// A downloaded companion animation.
#[derive(Clone)]
pub struct Gif {
    pub url: String,
    pub data: Vec<u8>,
}

impl Debug for Gif {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gif {{ url: {:?}, data: {} bytes }}", self.url, self.data.len())
    }
}

/// The directive for one turn, plus everything the interface may want to show.
#[derive(Debug)]
pub struct OracleReply {
    pub directive: Directive,
    /// Set when the directive came from the local random fallback instead of the oracle.
    pub fallback: bool,
    pub gif: Option<Gif>,
}

/// A source of per-turn directives. Must always produce one, failures stay internal.
pub trait Oracle: Debug {
    fn next_directive(&mut self) -> OracleReply;
}

#[derive(Deserialize)]
struct OracleResponse {
    answer: String,
    image: Option<String>,
}

/// The default oracle endpoint.
pub const DEFAULT_URL: &str = "https://yesno.wtf/api";

const ORACLE_TIMEOUT: Duration = Duration::from_secs(2);
const GIF_TIMEOUT: Duration = Duration::from_secs(4);
const MAX_GIF_BYTES: u64 = 8 * 1024 * 1024;

/// The blocking HTTP oracle. One request per turn, no retries.
pub struct OracleClient<R: Rng> {
    agent: ureq::Agent,
    url: String,
    fetch_gifs: bool,
    rng: R,
}

impl<R: Rng> OracleClient<R> {
    pub fn new(url: &str, fetch_gifs: bool, rng: R) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(ORACLE_TIMEOUT).build();
        OracleClient {
            agent,
            url: url.to_owned(),
            fetch_gifs,
            rng,
        }
    }

    fn fetch_answer(&self) -> Result<OracleResponse, Box<dyn Error>> {
        let response: OracleResponse = self.agent.get(&self.url).call()?.into_json()?;
        Ok(response)
    }

    fn fetch_gif(&self, url: &str) -> Result<Gif, Box<dyn Error>> {
        let response = self.agent.get(url).timeout(GIF_TIMEOUT).call()?;

        let mut data = Vec::new();
        response.into_reader().take(MAX_GIF_BYTES).read_to_end(&mut data)?;

        Ok(Gif {
            url: url.to_owned(),
            data,
        })
    }

    fn random_fallback(&mut self) -> OracleReply {
        let directive = if self.rng.gen() {
            Directive::PlaceYes
        } else {
            Directive::PlaceNo
        };
        OracleReply {
            directive,
            fallback: true,
            gif: None,
        }
    }
}

impl<R: Rng> Oracle for OracleClient<R> {
    fn next_directive(&mut self) -> OracleReply {
        let response = match self.fetch_answer() {
            Ok(response) => response,
            Err(e) => {
                warn!("oracle request failed ({}), falling back to a random stone", e);
                return self.random_fallback();
            }
        };

        let answer = match Answer::from_text(&response.answer) {
            Some(answer) => answer,
            None => {
                warn!("unrecognized oracle answer {:?}, falling back to a random stone", response.answer);
                return self.random_fallback();
            }
        };
        debug!("oracle answered {:?}", answer);

        let gif = if self.fetch_gifs {
            response.image.as_deref().and_then(|url| match self.fetch_gif(url) {
                Ok(gif) => Some(gif),
                Err(e) => {
                    warn!("gif fetch failed ({}), skipping", e);
                    None
                }
            })
        } else {
            None
        };

        OracleReply {
            directive: Directive::from_answer(answer),
            fallback: false,
            gif,
        }
    }
}

impl<R: Rng> Debug for OracleClient<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OracleClient {{ url: {:?}, fetch_gifs: {} }}", self.url, self.fetch_gifs)
    }
}

/// An offline oracle drawing answers from a local rng: mostly yes/no, the occasional maybe.
pub struct RandomOracle<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomOracle<R> {
    pub fn new(rng: R) -> Self {
        RandomOracle { rng }
    }
}

impl<R: Rng> Oracle for RandomOracle<R> {
    fn next_directive(&mut self) -> OracleReply {
        let roll = self.rng.gen_range(0..20);
        let directive = if roll < 9 {
            Directive::PlaceYes
        } else if roll < 18 {
            Directive::PlaceNo
        } else {
            Directive::PlaceMaybe
        };

        OracleReply {
            directive,
            fallback: false,
            gif: None,
        }
    }
}

impl<R: Rng> Debug for RandomOracle<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomOracle")
    }
}

/// An oracle that replays a fixed sequence of directives, for tests and demos.
#[derive(Debug)]
pub struct ScriptedOracle {
    directives: VecDeque<Directive>,
}

impl ScriptedOracle {
    pub fn new(directives: impl IntoIterator<Item = Directive>) -> Self {
        ScriptedOracle {
            directives: directives.into_iter().collect(),
        }
    }
}

impl Oracle for ScriptedOracle {
    fn next_directive(&mut self) -> OracleReply {
        let directive = self
            .directives
            .pop_front()
            .unwrap_or_else(|| panic!("scripted oracle ran out of directives"));

        OracleReply {
            directive,
            fallback: false,
            gif: None,
        }
    }
}
