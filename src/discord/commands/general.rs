// Small utility commands that don't touch any service.

use crate::discord::{Context, Error};

/// Responde com Pong!
#[poise::command(prefix_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say("Pong!").await?;
    Ok(())
}

/// Diz olá!
#[poise::command(prefix_command)]
pub async fn hello(ctx: Context<'_>) -> Result<(), Error> {
    let name = match ctx.author_member().await {
        Some(member) => member.display_name().to_string(),
        None => ctx.author().name.clone(),
    };
    ctx.say(format!("Olá, {}!", name)).await?;
    Ok(())
}

/// Mostra os comandos disponíveis.
#[poise::command(prefix_command)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Comando específico"] command: Option<String>,
) -> Result<(), Error> {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            extra_text_at_bottom: "Use !help <comando> para mais detalhes.",
            ..Default::default()
        },
    )
    .await?;
    Ok(())
}
