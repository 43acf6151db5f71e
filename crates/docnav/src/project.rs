//! Project loading shared by all commands.
//!
//! Each configured project goes through the same steps: read its sidebar
//! file, pick the sidebar, scan the content root and validate the tree
//! against the documents found there.

use docnav_config::{Config, ProjectConfig};
use docnav_corpus::{DocumentCorpus, FsCorpus};
use docnav_tree::{Project, SidebarFile, flatten, max_depth, validate, warn_if_too_deep};
use rayon::prelude::*;

use crate::error::{CliError, ProjectError};
use crate::output::Output;

/// A validated project with a few facts for status output.
pub(crate) struct LoadedProject {
    pub(crate) project: Project,
    pub(crate) pages: usize,
    pub(crate) depth: usize,
    pub(crate) too_deep: bool,
}

/// Load and validate one project against `corpus`.
pub(crate) fn load_project<C: DocumentCorpus + ?Sized>(
    config: &ProjectConfig,
    corpus: &C,
    max_depth_warning: usize,
) -> Result<LoadedProject, ProjectError> {
    let (sidebar_name, nav_tree) =
        SidebarFile::load(&config.sidebar_path)?.select(config.sidebar_name.as_deref())?;
    let project = Project::new(config.id.clone(), config.content_root.clone())
        .with_route_base_path(&config.route_base_path)
        .with_sidebar_name(sidebar_name)
        .with_nav_tree(nav_tree);

    let available = corpus.doc_ids()?;
    validate(&project.nav_tree, &available)?;

    let too_deep = warn_if_too_deep(&project.id, &project.nav_tree, max_depth_warning);
    Ok(LoadedProject {
        pages: flatten(&project.nav_tree).count(),
        depth: max_depth(&project.nav_tree),
        too_deep,
        project,
    })
}

/// Load every configured project from disk.
///
/// Projects are independent, so they load in parallel unless
/// `build.parallel` is off. Results come back in configuration order and the
/// first failure in that order is returned.
pub(crate) fn load_projects(config: &Config, output: &Output) -> Result<Vec<Project>, CliError> {
    let limit = config.build_resolved.max_depth_warning;
    let load = |project: &ProjectConfig| {
        let corpus = FsCorpus::new(project.content_root.clone());
        load_project(project, &corpus, limit)
    };

    let results: Vec<Result<LoadedProject, ProjectError>> = if config.build_resolved.parallel {
        config.projects_resolved.par_iter().map(load).collect()
    } else {
        config.projects_resolved.iter().map(load).collect()
    };

    let mut projects = Vec::with_capacity(results.len());
    for (project_config, result) in config.projects_resolved.iter().zip(results) {
        let loaded = result.map_err(|source| CliError::Project {
            project: project_config.id.clone(),
            source,
        })?;
        output.project_ok(
            &loaded.project.id,
            &format!("({} pages, depth {})", loaded.pages, loaded.depth),
        );
        if loaded.too_deep {
            output.warning(&format!(
                "  sidebar nests {} levels deep, more than the recommended {limit}",
                loaded.depth
            ));
        }
        projects.push(loaded.project);
    }
    Ok(projects)
}
