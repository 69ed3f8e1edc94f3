use crate::error::{Result, ScanError};
use crate::extract::{self, PageContent};
use crate::fetch::Fetcher;
use crate::store::{TermRecord, TermStore};
use futures::future::LocalBoxFuture;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

/// Walks a wiki's category tree depth-first and accumulates a glossary
/// of canonical terms. One crawler = one run; the store and the visited
/// set live inside it, so nothing is process-global.
///
/// The walk is fully sequential. Recursion is boxed because the futures
/// are self-referential, but the traversal order is the same as plain
/// call recursion: pre-order, subcategories before member pages.
pub struct Crawler {
    fetcher: Fetcher,
    base_url: Url,
    browse_url: Url,
    store: TermStore,
    visited_categories: HashSet<String>,
    resolving: HashSet<String>,
}

impl Crawler {
    /// `browse_page` is joined onto `base_url` to form the root page
    /// listing the wiki's top-level categories.
    pub fn new(base_url: Url, browse_page: &str) -> Result<Self> {
        let browse_url = base_url
            .join(browse_page)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", browse_page, e)))?;

        Ok(Self {
            fetcher: Fetcher::new(),
            base_url,
            browse_url,
            store: TermStore::new(),
            visited_categories: HashSet::new(),
            resolving: HashSet::new(),
        })
    }

    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Runs one full crawl. Returns the number of root categories found
    /// on the browse page; zero means the browse page was unreachable or
    /// listed nothing, in which case no walking happened.
    pub async fn crawl(&mut self) -> usize {
        info!("Loading browse page {}", self.browse_url);
        let Some(body) = self.fetcher.get(self.browse_url.as_str()).await else {
            return 0;
        };

        let roots = extract::browse_categories(&body, &self.base_url);
        info!("Found {} root categories", roots.len());

        for root in &roots {
            self.walk_category(root.url.clone(), root.name.clone()).await;
        }

        roots.len()
    }

    pub fn store(&self) -> &TermStore {
        &self.store
    }

    pub fn into_store(self) -> TermStore {
        self.store
    }

    pub fn visited_count(&self) -> usize {
        self.visited_categories.len()
    }

    /// Visits one category page: recurses into its subcategories, then
    /// resolves its member pages. Revisits are no-ops, which is what
    /// breaks category cycles.
    fn walk_category<'a>(&'a mut self, url: String, path: String) -> LocalBoxFuture<'a, ()> {
        Box::pin(async move {
            if !self.visited_categories.insert(url.clone()) {
                debug!("Already visited {}", url);
                return;
            }

            info!("Scanning category: {} ({})", path, url);
            let Some(body) = self.fetcher.get(&url).await else {
                return;
            };

            let listing = extract::category_listing(&body, &self.base_url);

            for subcategory in listing.subcategories {
                let child_path = format!("{} > {}", path, subcategory.name);
                self.walk_category(subcategory.url, child_path).await;
            }

            for page in listing.pages {
                self.resolve_page(page.name, page.url, path.clone()).await;
            }
        })
    }

    /// Resolves one member page into either a new term record or an
    /// alias on an existing one. First-seen-wins: a display name that is
    /// already settled is dropped without a fetch, even when discovered
    /// under a different category.
    fn resolve_page<'a>(
        &'a mut self,
        name: String,
        url: String,
        category_path: String,
    ) -> LocalBoxFuture<'a, ()> {
        Box::pin(async move {
            if self.store.contains(&name) {
                return;
            }
            // A redirect cycle would otherwise chase itself forever; a
            // chain that loops back resolves to nothing, same as a chain
            // that dies on a failed fetch.
            if !self.resolving.insert(name.clone()) {
                warn!("Redirect cycle through {}, dropping", name);
                return;
            }

            if let Some(body) = self.fetcher.get(&url).await {
                match extract::page_content(&body, &self.base_url) {
                    Some(PageContent::Redirect(target)) => {
                        if !self.store.is_term(&target.name) {
                            self.resolve_page(
                                target.name.clone(),
                                target.url.clone(),
                                category_path,
                            )
                            .await;
                        }

                        // The target may itself have been a redirect, in
                        // which case it is now in the redirect map and the
                        // alias belongs on the canonical record behind it.
                        let canonical = if self.store.is_term(&target.name) {
                            Some(target.name.clone())
                        } else {
                            self.store.redirect_target(&target.name).map(String::from)
                        };

                        match canonical {
                            Some(canonical) => {
                                self.store.add_alias(&canonical, &name);
                                info!("Redirect: {} -> {} (added as alias)", name, canonical);
                            }
                            None => {
                                debug!(
                                    "Dropping alias {}: target {} did not resolve",
                                    name, target.name
                                );
                            }
                        }
                    }
                    Some(PageContent::Article { summary }) => {
                        info!("Added {} [{}]", name, category_path);
                        self.store.insert_term(
                            &name,
                            TermRecord {
                                link: url,
                                category: category_path,
                                summary,
                                aliases: Vec::new(),
                            },
                        );
                    }
                    None => {
                        warn!("No usable content region at {}", url);
                    }
                }
            }

            self.resolving.remove(&name);
        })
    }
}
