// Bot presence on startup.
//
// Discord-layer glue only: we work with Discord SDK types
// (Context, ActivityData, OnlineStatus) and keep it short.

use poise::serenity_prelude as serenity;

const DEFAULT_ACTIVITY: &str = "Registrando Desempenho!";

/// Called once the bot is ready so the default presence is set in one place.
pub fn on_ready(ctx: &serenity::Context) {
    let activity = serenity::ActivityData::playing(DEFAULT_ACTIVITY);
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}
