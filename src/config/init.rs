//! Post-load initialization.
//!
//! Runs once between loading and handing the configuration to the rest of the
//! agent. It reports the effective options and, in multi-user mode, clears
//! every pool's sub-account so miner identities are carried upstream instead.

use crate::config::schema::AgentConfig;
use crate::observability::report::{InitEvent, ReportSink};

impl AgentConfig {
    /// Normalize the configuration and report it to `sink`.
    ///
    /// Pools are visited in order and never reordered. Running this twice
    /// leaves the pools as a single run does.
    pub fn initialize(&mut self, sink: &mut dyn ReportSink) {
        sink.report(InitEvent::MultiUserMode(self.multi_user_mode));
        sink.report(InitEvent::PoolUseTls(self.pool_use_tls));
        sink.report(InitEvent::AlwaysKeepDownconn(self.always_keep_downconn));
        sink.report(InitEvent::DisconnectWhenLostAsicboost(
            self.disconnect_when_lost_asicboost,
        ));

        if !self.fixed_worker_name.is_empty() {
            sink.report(InitEvent::FixedWorkerName(self.fixed_worker_name.clone()));
        }

        let multi_user_mode = self.multi_user_mode;
        for pool in &mut self.pools {
            let sub_account = if multi_user_mode {
                pool.sub_account.clear();
                None
            } else {
                Some(pool.sub_account.clone())
            };

            sink.report(InitEvent::PoolAdded {
                host: pool.host.clone(),
                port: pool.port,
                sub_account,
            });
        }
    }
}
