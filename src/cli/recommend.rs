use crate::{
    error, info, management::CredentialCache, spotify::auth::ClientCredentials, success, warning,
};

pub async fn recommend(tags: Vec<String>) {
    if tags.is_empty() {
        error!("No tags given. Pass at least one --tag.");
    }

    let cache = CredentialCache::new(Box::new(ClientCredentials::new()));

    info!("Resolving tracks for tags: {}", tags.join(", "));

    match crate::recommend::recommend(&cache, &tags).await {
        Ok(recommendation) => {
            if recommendation.skipped > 0 {
                warning!(
                    "Skipped {} candidates during resolution",
                    recommendation.skipped
                );
            }

            if recommendation.tracks.is_empty() {
                warning!("No playable tracks found for the given tags.");
                return;
            }

            for track in &recommendation.tracks {
                println!("{}", track);
            }

            success!("Resolved {} tracks", recommendation.tracks.len());
        }
        Err(e) => {
            error!("Failed to resolve recommendations: {}", e);
        }
    }
}
