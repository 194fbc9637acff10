//! Viewing and editing one's own account and profile.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use vidio_core::error::AppError;
use vidio_core::traits::storage::StorageProvider;
use vidio_database::{ProfileRepo, UserRepo};
use vidio_entity::user::{DEFAULT_AVATAR, Profile, UpdateProfile, UpdateUser, User};
use vidio_storage::avatar_path;

use crate::context::RequestContext;
use crate::forms::ProfileForm;

/// The account together with its profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    /// Account fields.
    pub user: User,
    /// Profile fields.
    pub profile: Profile,
}

/// Self-service profile operations.
#[derive(Debug, Clone)]
pub struct ProfileService {
    users: Arc<dyn UserRepo>,
    profiles: Arc<dyn ProfileRepo>,
    storage: Arc<dyn StorageProvider>,
    max_upload_bytes: u64,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(
        users: Arc<dyn UserRepo>,
        profiles: Arc<dyn ProfileRepo>,
        storage: Arc<dyn StorageProvider>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            users,
            profiles,
            storage,
            max_upload_bytes,
        }
    }

    /// The caller's account and profile.
    pub async fn get(&self, ctx: &RequestContext) -> Result<ProfileView, AppError> {
        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let profile = self
            .profiles
            .find_by_user(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;
        Ok(ProfileView { user, profile })
    }

    /// Update username, email, and biography together, replacing the
    /// profile picture when one is submitted.
    ///
    /// A replaced picture is removed from storage unless it is the shared
    /// default. A newly written picture is removed again if the profile
    /// cannot be saved.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        form: ProfileForm,
    ) -> Result<ProfileView, AppError> {
        let form = form.normalized();
        form.check(self.max_upload_bytes)?;

        let previous = self
            .profiles
            .find_by_user(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;

        let user = self
            .users
            .update(&UpdateUser {
                id: ctx.user_id,
                username: form.username,
                email: form.email,
            })
            .await?;

        let new_avatar = match form.avatar {
            Some(file) => {
                let path = avatar_path(&file.file_name);
                self.storage.write(&path, file.data).await?;
                Some(path)
            }
            None => None,
        };

        let update = UpdateProfile {
            user_id: ctx.user_id,
            bio: form.bio,
            avatar: new_avatar.clone(),
        };
        let profile = match self.profiles.update(&update).await {
            Ok(profile) => profile,
            Err(e) => {
                if let Some(path) = &new_avatar {
                    self.remove_quietly(path).await;
                }
                return Err(e);
            }
        };

        if new_avatar.is_some() && previous.avatar != DEFAULT_AVATAR {
            self.remove_quietly(&previous.avatar).await;
        }

        info!(
            user_id = %ctx.user_id,
            avatar = %profile.avatar,
            "Profile updated"
        );
        Ok(ProfileView { user, profile })
    }

    async fn remove_quietly(&self, path: &str) {
        if let Err(e) = self.storage.delete(path).await {
            warn!(path, error = %e, "Failed to remove profile picture");
        }
    }
}
