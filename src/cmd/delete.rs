use crate::{
    args::DeleteArgs,
    prompt::{DialoguerPrompt, Prompt},
    storage::{BoundCollection, StorageManager},
    Config, Credentials,
};
use log::debug;

/// Delete a bookmark from a collection.
pub async fn delete(
    config: &Config,
    credentials: Credentials,
    args: &DeleteArgs,
) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    let manager = StorageManager::new(config, credentials);
    let collection = manager.resolve(&args.collection)?;
    let mut prompt = DialoguerPrompt;

    let deleted = delete_bookmark(&collection, &mut prompt, &args.object_id, args.yes).await?;

    if deleted {
        println!("Bookmark {} deleted successfully!", args.object_id);
    } else {
        println!("Deletion cancelled.");
    }

    Ok(())
}

/// Returns `false` if the user cancelled the deletion.
pub async fn delete_bookmark(
    collection: &BoundCollection,
    prompt: &mut impl Prompt,
    object_id: &str,
    skip_confirmation: bool,
) -> Result<bool, anyhow::Error> {
    if !skip_confirmation
        && !prompt.confirm(
            &format!("Are you sure you want to delete bookmark {object_id}?"),
            false,
        )?
    {
        return Ok(false);
    }

    collection.delete(object_id).await?;

    Ok(true)
}
