use tokio::sync::{broadcast, watch};
use tokio_stream::wrappers::{BroadcastStream, WatchStream};
use tracing::{debug, info};

use roster_core::{Bot, ListMode, ListOrder};

const PARTITION_CHANNEL_CAPACITY: usize = 32;

/// Owns the canonical bot list and its two derived partitions (favorite /
/// non-favorite), and republishes them whenever a command changes what an
/// observer would see.
///
/// Commands run to completion synchronously: state is mutated, then owned
/// snapshots are pushed into the output channels before the command returns.
/// The partition channels do not replay to late subscribers; the list-mode
/// channel replays its latest value. That asymmetry is deliberate —
/// partition watchers re-trigger emission via [`RosterController::load`],
/// while a late list-mode watcher must learn the current mode immediately.
pub struct RosterController {
    bots: Vec<Bot>,
    favorites: Vec<Bot>,
    others: Vec<Bot>,
    order: ListOrder,
    favorites_tx: broadcast::Sender<Vec<Bot>>,
    others_tx: broadcast::Sender<Vec<Bot>>,
    list_mode_tx: watch::Sender<Option<bool>>,
}

impl RosterController {
    pub fn new() -> Self {
        let (favorites_tx, _) = broadcast::channel(PARTITION_CHANNEL_CAPACITY);
        let (others_tx, _) = broadcast::channel(PARTITION_CHANNEL_CAPACITY);
        let (list_mode_tx, _) = watch::channel(None);
        Self {
            bots: Vec::new(),
            favorites: Vec::new(),
            others: Vec::new(),
            order: ListOrder::default(),
            favorites_tx,
            others_tx,
            list_mode_tx,
        }
    }

    /// Subscribe to favorite-partition snapshots. No replay: only emissions
    /// after this call are delivered.
    pub fn subscribe_favorites(&self) -> broadcast::Receiver<Vec<Bot>> {
        self.favorites_tx.subscribe()
    }

    /// Subscribe to non-favorite-partition snapshots. No replay.
    pub fn subscribe_others(&self) -> broadcast::Receiver<Vec<Bot>> {
        self.others_tx.subscribe()
    }

    /// Subscribe to list-mode changes. The latest value is replayed; `None`
    /// means nothing has been emitted yet.
    pub fn subscribe_list_mode(&self) -> watch::Receiver<Option<bool>> {
        self.list_mode_tx.subscribe()
    }

    /// Favorite partition as a `Stream` of snapshots.
    pub fn favorites_stream(&self) -> BroadcastStream<Vec<Bot>> {
        BroadcastStream::new(self.subscribe_favorites())
    }

    /// Non-favorite partition as a `Stream` of snapshots.
    pub fn others_stream(&self) -> BroadcastStream<Vec<Bot>> {
        BroadcastStream::new(self.subscribe_others())
    }

    /// List mode as a `Stream`, starting with the current value.
    pub fn list_mode_stream(&self) -> WatchStream<Option<bool>> {
        WatchStream::new(self.subscribe_list_mode())
    }

    pub fn order(&self) -> ListOrder {
        self.order
    }

    /// Emits `true` iff the requested mode is the list view.
    pub fn set_list_mode(&self, mode: ListMode) {
        self.list_mode_tx.send_replace(Some(mode == ListMode::List));
    }

    /// One-shot initialization from the external record source.
    ///
    /// The first call stores the list as canonical, orders it with the
    /// current mode, splits it into the two partitions, and emits `true` on
    /// the list-mode channel. Subsequent calls skip all of that — the
    /// canonical list is write-once — but every call re-emits both
    /// partitions, so a watcher that subscribed after the initial load can
    /// trigger a snapshot without forcing a recompute.
    pub fn load(&mut self, bots: Vec<Bot>) {
        if self.bots.is_empty() {
            self.bots = bots;
            match self.order {
                ListOrder::ByName => sort_by_name(&mut self.bots),
                ListOrder::ByDate => sort_by_date(&mut self.bots),
            }
            self.favorites = self.bots.iter().filter(|b| b.favorite).cloned().collect();
            self.others = self.bots.iter().filter(|b| !b.favorite).cloned().collect();
            self.list_mode_tx.send_replace(Some(true));
            info!(
                total = self.bots.len(),
                favorites = self.favorites.len(),
                "bot list loaded"
            );
        }
        let _ = self.favorites_tx.send(self.favorites.clone());
        let _ = self.others_tx.send(self.others.clone());
    }

    /// Moves a bot into the favorite partition.
    ///
    /// Permissive on purpose: a bot that is not currently in the
    /// non-favorite partition is still appended to the favorites. Callers
    /// own the precondition that the bot lives in the opposite partition.
    pub fn mark_favorite(&mut self, mut bot: Bot) {
        bot.favorite = true;
        self.others.retain(|b| b.id != bot.id);
        self.favorites.push(bot.clone());
        self.update_canonical(bot);
        match self.order {
            ListOrder::ByDate => sort_by_date(&mut self.favorites),
            ListOrder::ByName => sort_by_name(&mut self.favorites),
        }
        let _ = self.others_tx.send(self.others.clone());
        let _ = self.favorites_tx.send(self.favorites.clone());
    }

    /// Moves a bot into the non-favorite partition. Symmetric to
    /// [`RosterController::mark_favorite`].
    pub fn unmark_favorite(&mut self, mut bot: Bot) {
        bot.favorite = false;
        self.favorites.retain(|b| b.id != bot.id);
        self.others.push(bot.clone());
        self.update_canonical(bot);
        match self.order {
            ListOrder::ByDate => sort_by_date(&mut self.others),
            ListOrder::ByName => sort_by_name(&mut self.others),
        }
        let _ = self.others_tx.send(self.others.clone());
        let _ = self.favorites_tx.send(self.favorites.clone());
    }

    /// Replace the canonical entry with the same id, keeping its slot.
    /// A bot with no canonical entry is left alone.
    fn update_canonical(&mut self, bot: Bot) {
        if let Some(slot) = self.bots.iter_mut().find(|b| b.id == bot.id) {
            *slot = bot;
        }
    }

    /// Sets the ordering mode and immediately re-sorts with it.
    pub fn set_order(&mut self, order: ListOrder) {
        debug!(order = %order, "list order changed");
        self.order = order;
        self.sort_lists();
    }

    /// Re-sorts both partitions and the canonical list with the current
    /// mode, emitting both partitions. Shared dispatch path for
    /// [`RosterController::set_order`] and explicit re-sort requests.
    pub fn sort_lists(&mut self) {
        match self.order {
            ListOrder::ByDate => self.reorder_by_date(),
            ListOrder::ByName => self.reorder_by_name(),
        }
    }

    fn reorder_by_name(&mut self) {
        sort_by_name(&mut self.favorites);
        let _ = self.favorites_tx.send(self.favorites.clone());
        sort_by_name(&mut self.others);
        let _ = self.others_tx.send(self.others.clone());
        sort_by_name(&mut self.bots);
    }

    fn reorder_by_date(&mut self) {
        sort_by_date(&mut self.favorites);
        let _ = self.favorites_tx.send(self.favorites.clone());
        sort_by_date(&mut self.others);
        let _ = self.others_tx.send(self.others.clone());
        sort_by_date(&mut self.bots);
    }

    /// Rebuilds both partitions from the canonical list, keeping bots whose
    /// lower-cased name contains the lower-cased needle. An empty needle
    /// matches every name, which is exactly how "clear search" works.
    pub fn search(&mut self, text: &str) {
        let needle = text.to_lowercase();
        debug!(needle = %needle, "search applied");
        self.favorites = self
            .bots
            .iter()
            .filter(|b| b.favorite && b.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let _ = self.favorites_tx.send(self.favorites.clone());
        self.others = self
            .bots
            .iter()
            .filter(|b| !b.favorite && b.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let _ = self.others_tx.send(self.others.clone());
    }
}

impl Default for RosterController {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-sensitive lexicographic ascending. `sort_by` is stable, so equal
/// names keep their relative input order.
fn sort_by_name(bots: &mut [Bot]) {
    bots.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Earliest created first; equal timestamps keep their relative input order.
fn sort_by_date(bots: &mut [Bot]) {
    bots.sort_by_key(|b| b.created);
}
