pub(crate) mod controls;
pub(crate) mod list;
pub(crate) mod next;
pub(crate) mod pause;
pub(crate) mod play;
pub(crate) mod resume;

pub(crate) mod utils;

use crate::{CommandResult, Context};
use poise::CreateReply;
