// Prefix commands for member performance logs.
//
// Same pattern as the rest of the Discord layer:
// 1. Extract primitive data from Discord types
// 2. Call core service
// 3. Format the response based on the result

use super::formatter::{
    delete_outcome_message, log_listing_embed, no_logs_message, recorded_log_embed,
};
use crate::core::performance::{LogSubject, ManageAccess, PerformanceLogError};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Registra o desempenho de um jogador.
///
/// Ex: `!logar @JogadorX pontuacao:9 erros:2 Observacao:Jogou muito bem!`
#[poise::command(prefix_command, guild_only)]
pub async fn logar(
    ctx: Context<'_>,
    #[description = "Jogador avaliado"] membro: serenity::Member,
    #[description = "pontuacao:N erros:N Observacao:texto"]
    #[rest]
    args: Option<String>,
) -> Result<(), Error> {
    let subject = LogSubject {
        user_id: membro.user.id.get(),
        username: membro.display_name().to_string(),
    };
    let raw_args = args.as_deref().unwrap_or("");

    match ctx.data().performance.record_log(subject, raw_args).await {
        Ok(entry) => {
            let author = author_display_name(ctx).await;
            let embed = recorded_log_embed(&entry, &author);
            ctx.send(poise::CreateReply::default().embed(embed)).await?;
        }
        Err(e) => reply_or_propagate(ctx, e).await?,
    }

    Ok(())
}

/// Mostra os logs de desempenho de um jogador.
///
/// Ex: `!ver_logs @JogadorX [quantidade]`
#[poise::command(prefix_command, guild_only)]
pub async fn ver_logs(
    ctx: Context<'_>,
    #[description = "Jogador"] membro: serenity::Member,
    #[description = "Quantidade de registros (padrão: 5)"] quantidade: Option<u32>,
) -> Result<(), Error> {
    let username = membro.display_name().to_string();
    let logs = match ctx
        .data()
        .performance
        .recent_logs(membro.user.id.get(), quantidade)
        .await
    {
        Ok(logs) => logs,
        Err(e) => return reply_or_propagate(ctx, e).await,
    };

    if logs.is_empty() {
        ctx.say(no_logs_message(&username)).await?;
        return Ok(());
    }

    let author = author_display_name(ctx).await;
    let embed = log_listing_embed(&username, &logs, &author);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Apaga um log de desempenho pelo ID. Requer permissão de gerenciar mensagens.
///
/// Ex: `!apagar_log 42`
#[poise::command(prefix_command, guild_only)]
pub async fn apagar_log(
    ctx: Context<'_>,
    #[description = "ID do log"] id: i64,
) -> Result<(), Error> {
    let access = manage_access(ctx).await;

    match ctx.data().performance.delete_log(id, access).await {
        Ok(outcome) => {
            ctx.say(delete_outcome_message(id, outcome)).await?;
        }
        Err(e) => reply_or_propagate(ctx, e).await?,
    }

    Ok(())
}

/// Validation errors are shown to the invoker; storage errors go to `on_error`.
async fn reply_or_propagate(ctx: Context<'_>, error: PerformanceLogError) -> Result<(), Error> {
    if !error.is_user_facing() {
        return Err(error.into());
    }
    ctx.say(error.to_string()).await?;
    Ok(())
}

/// Guild-level MANAGE_MESSAGES of the invoking member.
async fn manage_access(ctx: Context<'_>) -> ManageAccess {
    let Some(member) = ctx.author_member().await else {
        return ManageAccess::Denied;
    };

    ctx.guild()
        .map(|guild| guild.member_permissions(&member).manage_messages())
        .unwrap_or(false)
        .into()
}

async fn author_display_name(ctx: Context<'_>) -> String {
    match ctx.author_member().await {
        Some(member) => member.display_name().to_string(),
        None => ctx.author().name.clone(),
    }
}
