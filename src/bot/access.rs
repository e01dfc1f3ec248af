//! Staff gate shared by the pricing commands.

use crate::{bot::Context, errors::Result};
use tracing::warn;

/// Ephemeral notice shown to callers who are not staff.
pub const STAFF_ONLY_MESSAGE: &str = "Only staff can use this command 💗";

/// Role IDs of the invoking guild member, or `None` outside a guild.
pub async fn caller_roles(ctx: Context<'_>) -> Option<Vec<u64>> {
    ctx.author_member()
        .await
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
}

/// Checks the caller against the staff allow-list.
///
/// Returns `Ok(true)` for staff. Anyone else gets a private rejection notice and
/// `Ok(false)`; the caller should stop without computing anything.
pub async fn ensure_staff(ctx: Context<'_>) -> Result<bool> {
    let roles = caller_roles(ctx).await;
    if ctx.data().staff_roles.is_staff(roles.as_deref()) {
        return Ok(true);
    }

    warn!(
        user = %ctx.author().name,
        command = %ctx.command().name,
        in_guild = roles.is_some(),
        "Rejected non-staff caller"
    );
    ctx.send(
        poise::CreateReply::default()
            .content(STAFF_ONLY_MESSAGE)
            .ephemeral(true),
    )
    .await?;
    Ok(false)
}
