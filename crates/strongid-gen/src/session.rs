// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-pass pipeline orchestration.
//!
//! [`GeneratorSession`] is the handle a host driver keeps across
//! compilation passes. One [`run`](GeneratorSession::run) is one pass:
//!
//! 1. scan + resolve + project, fanned out per file (each file's
//!    resolution is pure and independent, so rayon order does not affect
//!    the result — the merge below re-establishes forest order),
//! 2. collapse exact duplicates and fail on file-key collisions,
//! 3. emit through the incremental cache (misses rendered in parallel),
//! 4. drop cache entries whose declarations disappeared,
//! 5. prepend the two fixed registrar artifacts.
//!
//! The output set is identical for any parallelism level and any file
//! order permutation of equal content, because every stage is keyed by
//! value.

use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    sync::Arc
};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    cache::ArtifactCache,
    cancel::CancelToken,
    context::EntityStrongIdContext,
    emit::{self, GeneratedArtifact},
    error::GenerateError,
    registrar,
    resolve::{self, Marker},
    scan::{self, SourceFile}
};

/// Driver-facing generation session.
///
/// Holds the recognized marker and the incremental cache; everything
/// else is per-pass state.
#[derive(Debug, Default)]
pub struct GeneratorSession {
    marker: Marker,
    cache: ArtifactCache
}

/// Result of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    /// All artifacts of the pass: the two fixed registrar outputs
    /// followed by four artifacts per context, in context order.
    pub artifacts: Vec<GeneratedArtifact>,
    /// The deduplicated contexts of the pass, in forest order.
    pub contexts: Vec<EntityStrongIdContext>
}

impl GeneratorSession {
    /// Session recognizing the default `#[strong_id]` marker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session recognizing a custom marker.
    #[must_use]
    pub fn with_marker(marker: Marker) -> Self {
        Self {
            marker,
            cache: ArtifactCache::new()
        }
    }

    /// The incremental cache, exposed for driver introspection.
    #[must_use]
    pub fn cache(&self) -> &ArtifactCache {
        &self.cache
    }

    /// Run one generation pass over the forest.
    ///
    /// # Errors
    ///
    /// [`GenerateError::Cancelled`] when the token is raised between
    /// units of work, [`GenerateError::Parse`] for an unparseable file,
    /// [`GenerateError::FileKeyCollision`] when two distinct
    /// declarations claim the same generated file keys, and
    /// [`GenerateError::Emit`] when a template rejects a context.
    pub fn run(
        &mut self,
        forest: &[SourceFile],
        cancel: &CancelToken
    ) -> Result<GenerationOutput, GenerateError> {
        cancel.check()?;

        let marker = &self.marker;
        let per_file: Vec<Vec<EntityStrongIdContext>> = forest
            .par_iter()
            .map(|file| -> Result<Vec<EntityStrongIdContext>, GenerateError> {
                cancel.check()?;
                collect_contexts(file, marker)
            })
            .collect::<Result<_, _>>()?;

        let contexts = merge(per_file)?;
        cancel.check()?;

        let missing: Vec<EntityStrongIdContext> = contexts
            .iter()
            .filter(|ctx| !self.cache.contains(ctx))
            .cloned()
            .collect();

        debug!(
            total = contexts.len(),
            cached = contexts.len() - missing.len(),
            "emitting contexts"
        );

        let fresh: Vec<(EntityStrongIdContext, Arc<Vec<GeneratedArtifact>>)> = missing
            .into_par_iter()
            .map(|ctx| -> Result<_, GenerateError> {
                cancel.check()?;
                let artifacts = Arc::new(emit::generate(&ctx)?);
                Ok((ctx, artifacts))
            })
            .collect::<Result<_, _>>()?;

        for (ctx, artifacts) in fresh {
            self.cache.insert(ctx, artifacts);
        }

        let live: HashSet<EntityStrongIdContext> = contexts.iter().cloned().collect();
        self.cache.retain_live(&live);

        let mut artifacts = registrar::fixed_artifacts();
        for ctx in &contexts {
            artifacts.extend(self.cache.emit(ctx)?.iter().cloned());
        }

        info!(
            files = forest.len(),
            contexts = contexts.len(),
            artifacts = artifacts.len(),
            "generation pass complete"
        );

        Ok(GenerationOutput { artifacts, contexts })
    }
}

/// Parse one file and run it through scan → resolve → project.
fn collect_contexts(
    file: &SourceFile,
    marker: &Marker
) -> Result<Vec<EntityStrongIdContext>, GenerateError> {
    let ast = syn::parse_file(&file.source).map_err(|err| GenerateError::Parse {
        file: file.name.clone(),
        message: err.to_string()
    })?;

    let candidates = scan::scan_file(&ast);
    debug!(file = %file.name, candidates = candidates.len(), "scanned");

    Ok(candidates
        .iter()
        .filter_map(|candidate| resolve::resolve(candidate, marker))
        .map(|binding| EntityStrongIdContext::project(&binding))
        .collect())
}

/// Collapse exact duplicates and reject colliding file keys, keeping
/// forest order.
fn merge(
    per_file: Vec<Vec<EntityStrongIdContext>>
) -> Result<Vec<EntityStrongIdContext>, GenerateError> {
    let mut ordered = Vec::new();
    let mut seen: HashSet<EntityStrongIdContext> = HashSet::new();
    let mut by_key: HashMap<String, EntityStrongIdContext> = HashMap::new();

    for ctx in per_file.into_iter().flatten() {
        if !seen.insert(ctx.clone()) {
            debug!(qualified = %ctx.qualified_name(), "duplicate context collapsed");
            continue;
        }

        match by_key.entry(ctx.qualified_name()) {
            Entry::Occupied(existing) => {
                let first = existing.get();
                warn!(
                    qualified = %ctx.qualified_name(),
                    first = %first.id_type_name(),
                    second = %ctx.id_type_name(),
                    "file key collision"
                );
                return Err(GenerateError::FileKeyCollision {
                    qualified: ctx.qualified_name(),
                    first: first.id_type_name().to_string(),
                    second: ctx.id_type_name().to_string()
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(ctx.clone());
                ordered.push(ctx);
            }
        }
    }

    Ok(ordered)
}
