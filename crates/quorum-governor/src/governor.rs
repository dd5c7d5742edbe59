//! The governor facade: every entry point of the engine.
//!
//! Callers arrive already authenticated; every operation takes the caller
//! address explicitly. Methods run to completion on `&mut self`, so the
//! engine is strictly serialized. Every failure path returns before any
//! state is mutated, which makes each operation all-or-nothing.

use tracing::{info, warn};

use quorum_types::{Address, GovernorError, GovernorEvent, RoleId, Selector};
use quorum_voting::{VoteLedger, VoteOutcome};

use crate::dispatch::Dispatcher;
use crate::functions::FunctionRegistry;
use crate::management::ManagementCall;
use crate::roles::RoleRegistry;
use crate::transactions::{Transaction, TransactionPool};

/// Candidate key of a function-role campaign: (user, target, selector).
pub type FunctionRoleKey = (Address, Address, Selector);

/// What executing a transaction's payload amounts to.
enum Execution {
    /// An outbound call to an external collaborator.
    External,
    /// A decoded, validated call to one of the engine's own management
    /// functions.
    Management(ManagementCall),
}

/// The weighted-voting access-control engine.
pub struct Governor {
    address: Address,
    admin_quorum: u32,
    roles: RoleRegistry,
    functions: FunctionRegistry,
    transactions: TransactionPool,
    grant_admin_ballots: VoteLedger<Address>,
    revoke_admin_ballots: VoteLedger<Address>,
    grant_pause_ballots: VoteLedger<Address>,
    revoke_pause_ballots: VoteLedger<Address>,
    unpause_ballots: VoteLedger<()>,
    grant_function_ballots: VoteLedger<FunctionRoleKey>,
    revoke_function_ballots: VoteLedger<FunctionRoleKey>,
    paused: bool,
    dispatcher: Box<dyn Dispatcher>,
    events: Vec<GovernorEvent>,
}

impl Governor {
    /// Create an engine at `address` governed by `admins`.
    ///
    /// `admin_quorum` is the governor-wide threshold for admin-membership,
    /// pause-role, and unpause campaigns; it defaults to the number of
    /// initial admins. The engine grants itself the Self role and registers
    /// its management functions against its own address, so they can only
    /// be reached through the propose/approve ritual.
    pub fn new(
        address: Address,
        admins: Vec<Address>,
        admin_quorum: Option<u32>,
        dispatcher: Box<dyn Dispatcher>,
    ) -> Result<Self, GovernorError> {
        let quorum = admin_quorum.unwrap_or(admins.len() as u32);
        if quorum < 1 {
            return Err(GovernorError::InvalidThreshold);
        }

        let mut roles = RoleRegistry::new();
        for admin in &admins {
            roles.grant(RoleId::admin(), *admin);
        }
        roles.grant(RoleId::own(), address);

        let mut functions = FunctionRegistry::new();
        for (signature, votes) in ManagementCall::registered_functions(quorum) {
            let selector = Selector::from_signature(signature);
            functions.set(address, selector, votes)?;
            roles.set_role_admin(RoleId::of_function(&address, &selector), RoleId::admin());
        }

        info!(address = %address, admins = admins.len(), quorum, "governor created");

        Ok(Self {
            address,
            admin_quorum: quorum,
            roles,
            functions,
            transactions: TransactionPool::new(),
            grant_admin_ballots: VoteLedger::new(),
            revoke_admin_ballots: VoteLedger::new(),
            grant_pause_ballots: VoteLedger::new(),
            revoke_pause_ballots: VoteLedger::new(),
            unpause_ballots: VoteLedger::new(),
            grant_function_ballots: VoteLedger::new(),
            revoke_function_ballots: VoteLedger::new(),
            paused: false,
            dispatcher,
            events: Vec::new(),
        })
    }

    // ------------------------------------------------------------------
    // Threshold registry
    // ------------------------------------------------------------------

    /// Register a function of `target` for governance. Admin only.
    ///
    /// The engine's own entries are off limits: rewriting a management
    /// threshold here would sidestep the quorum that guards the
    /// `SetRequiredVotesOfFunction` self-call.
    pub fn add_function(
        &mut self,
        caller: Address,
        target: Address,
        signature: &str,
        required_votes: u32,
    ) -> Result<Selector, GovernorError> {
        self.require_not_paused()?;
        self.require_admin(&caller)?;
        if target == self.address {
            return Err(GovernorError::Unqualified);
        }
        let selector = Selector::from_signature(signature);
        self.functions.set(target, selector, required_votes)?;
        self.adopt_function_role(target, selector);
        self.emit(GovernorEvent::FunctionAdded {
            target,
            selector,
            required_votes,
        });
        info!(target = %target, selector = %selector, required_votes, "function added");
        Ok(selector)
    }

    /// Remove a governed function. Admin only.
    ///
    /// In-flight campaigns and already-created transactions keep their
    /// history, but no new threshold lookup against the pair will resolve.
    pub fn remove_function(
        &mut self,
        caller: Address,
        target: Address,
        signature: &str,
    ) -> Result<Selector, GovernorError> {
        self.require_not_paused()?;
        self.require_admin(&caller)?;
        if target == self.address {
            return Err(GovernorError::Unqualified);
        }
        let selector = Selector::from_signature(signature);
        if !self.functions.remove(&target, &selector) {
            return Err(GovernorError::NotFound);
        }
        self.emit(GovernorEvent::FunctionRemoved { target, selector });
        info!(target = %target, selector = %selector, "function removed");
        Ok(selector)
    }

    // ------------------------------------------------------------------
    // Admin membership governance
    // ------------------------------------------------------------------

    /// Vote to grant the Admin role to `candidate`. Admin voters only;
    /// takes effect when the admin quorum is reached.
    pub fn grant_admin(
        &mut self,
        caller: Address,
        candidate: Address,
    ) -> Result<VoteOutcome, GovernorError> {
        self.require_not_paused()?;
        self.require_admin(&caller)?;
        let outcome = self
            .grant_admin_ballots
            .cast_with_threshold(candidate, caller, self.admin_quorum)
            .map_err(|_| GovernorError::AlreadyVoted)?;
        if outcome.reached() {
            if self.roles.grant(RoleId::admin(), candidate) {
                self.emit(GovernorEvent::RoleGranted {
                    role: RoleId::admin(),
                    account: candidate,
                    sender: caller,
                });
            }
            self.emit(GovernorEvent::AdminGranted { account: candidate });
        }
        Ok(outcome)
    }

    /// Vote to revoke the Admin role from `candidate`.
    ///
    /// An admin may vote to revoke itself; its earlier votes in other
    /// in-flight campaigns stay counted, but it can cast no further ones.
    pub fn revoke_admin(
        &mut self,
        caller: Address,
        candidate: Address,
    ) -> Result<VoteOutcome, GovernorError> {
        self.require_not_paused()?;
        self.require_admin(&caller)?;
        let outcome = self
            .revoke_admin_ballots
            .cast_with_threshold(candidate, caller, self.admin_quorum)
            .map_err(|_| GovernorError::AlreadyVoted)?;
        if outcome.reached() {
            if self.roles.revoke(&RoleId::admin(), &candidate) {
                self.emit(GovernorEvent::RoleRevoked {
                    role: RoleId::admin(),
                    account: candidate,
                    sender: caller,
                });
            }
            self.emit(GovernorEvent::AdminRevoked { account: candidate });
        }
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Function-role governance
    // ------------------------------------------------------------------

    /// Vote to grant `user` the derived role of (target, signature).
    ///
    /// Voters must be admins or already hold the derived role, so a quorum
    /// of existing role-holders can admit new peers. The threshold is the
    /// function's registered required-vote count, re-read on every vote.
    pub fn grant_role_of_function(
        &mut self,
        caller: Address,
        target: Address,
        signature: &str,
        user: Address,
    ) -> Result<VoteOutcome, GovernorError> {
        self.require_not_paused()?;
        let selector = Selector::from_signature(signature);
        let threshold = self
            .functions
            .required_votes(&target, &selector)
            .ok_or(GovernorError::NotFound)?;
        let role = RoleId::of_function(&target, &selector);
        if !self.is_admin(&caller) && !self.roles.has_role(&role, &caller) {
            return Err(GovernorError::Unqualified);
        }
        let outcome = self
            .grant_function_ballots
            .cast_with_threshold((user, target, selector), caller, threshold)
            .map_err(|_| GovernorError::AlreadyVoted)?;
        if outcome.reached() {
            self.emit(GovernorEvent::FunctionGranted {
                target,
                selector,
                account: user,
            });
            if self.roles.grant(role, user) {
                self.emit(GovernorEvent::RoleGranted {
                    role,
                    account: user,
                    sender: caller,
                });
            }
        }
        Ok(outcome)
    }

    /// Vote to revoke `user`'s derived role of (target, signature).
    pub fn revoke_role_of_function(
        &mut self,
        caller: Address,
        target: Address,
        signature: &str,
        user: Address,
    ) -> Result<VoteOutcome, GovernorError> {
        self.require_not_paused()?;
        let selector = Selector::from_signature(signature);
        let threshold = self
            .functions
            .required_votes(&target, &selector)
            .ok_or(GovernorError::NotFound)?;
        let role = RoleId::of_function(&target, &selector);
        if !self.is_admin(&caller) && !self.roles.has_role(&role, &caller) {
            return Err(GovernorError::Unqualified);
        }
        let outcome = self
            .revoke_function_ballots
            .cast_with_threshold((user, target, selector), caller, threshold)
            .map_err(|_| GovernorError::AlreadyVoted)?;
        if outcome.reached() {
            self.emit(GovernorEvent::FunctionRevoked {
                target,
                selector,
                account: user,
            });
            if self.roles.revoke(&role, &user) {
                self.emit(GovernorEvent::RoleRevoked {
                    role,
                    account: user,
                    sender: caller,
                });
            }
        }
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Transaction lifecycle
    // ------------------------------------------------------------------

    /// Propose an outbound call. The proposer's vote counts as vote #1;
    /// with a threshold of 1 the call executes within the same operation.
    pub fn propose(
        &mut self,
        caller: Address,
        target: Address,
        value: u128,
        data: Vec<u8>,
    ) -> Result<u64, GovernorError> {
        self.require_not_paused()?;
        let selector = Selector::from_payload(&data).ok_or(GovernorError::MalformedPayload)?;
        let threshold = self
            .functions
            .required_votes(&target, &selector)
            .ok_or(GovernorError::NotFound)?;
        self.require_admin_or_function_role(&caller, &target, &selector)?;

        if threshold <= 1 {
            let execution = self.prepare_execution(&target, &data)?;
            if let Execution::External = execution {
                self.dispatcher
                    .dispatch(&target, value, &data)
                    .map_err(|e| GovernorError::CallFailed(e.to_string()))?;
            }
            let id = self.transactions.insert(target, value, data.clone(), caller);
            if let Some(tx) = self.transactions.get_mut(id) {
                tx.executed = true;
            }
            self.emit(GovernorEvent::TransactionProposed {
                id,
                destination: target,
                value,
                data: data.clone(),
            });
            self.emit(GovernorEvent::TransactionExecuted {
                id,
                destination: target,
                value,
                data,
            });
            if let Execution::Management(call) = execution {
                self.apply_management(call);
            }
            info!(id, destination = %target, "transaction proposed and executed");
            return Ok(id);
        }

        let id = self.transactions.insert(target, value, data.clone(), caller);
        self.emit(GovernorEvent::TransactionProposed {
            id,
            destination: target,
            value,
            data,
        });
        info!(id, destination = %target, threshold, "transaction proposed");
        Ok(id)
    }

    /// Vote for a pending transaction; executes it when the vote count
    /// reaches the function's threshold.
    ///
    /// Execution is atomic with the triggering vote: if the downstream
    /// call fails, neither the vote nor the executed flag is committed.
    pub fn approve(&mut self, caller: Address, id: u64) -> Result<(), GovernorError> {
        self.require_not_paused()?;
        let (destination, value, data, prior_votes) = {
            let tx = self.transactions.get(id).ok_or(GovernorError::NotFound)?;
            if tx.executed {
                return Err(GovernorError::AlreadyExecuted);
            }
            (tx.destination, tx.value, tx.data.clone(), tx.total_votes())
        };
        let selector = Selector::from_payload(&data).ok_or(GovernorError::MalformedPayload)?;
        self.require_admin_or_function_role(&caller, &destination, &selector)?;
        if self
            .transactions
            .get(id)
            .map(|tx| tx.has_voted(&caller))
            .unwrap_or(false)
        {
            return Err(GovernorError::AlreadyVoted);
        }
        // Re-read fresh: a threshold update mid-flight takes effect here,
        // and a removed entry makes the transaction unapprovable.
        let threshold = self
            .functions
            .required_votes(&destination, &selector)
            .ok_or(GovernorError::NotFound)?;
        let total_votes = prior_votes + 1;

        if total_votes >= threshold {
            let execution = self.prepare_execution(&destination, &data)?;
            if let Execution::External = execution {
                self.dispatcher
                    .dispatch(&destination, value, &data)
                    .map_err(|e| GovernorError::CallFailed(e.to_string()))?;
            }
            if let Some(tx) = self.transactions.get_mut(id) {
                tx.record_vote(caller);
                tx.executed = true;
            }
            self.emit(GovernorEvent::TransactionApproved {
                id,
                destination,
                total_votes,
            });
            self.emit(GovernorEvent::TransactionExecuted {
                id,
                destination,
                value,
                data,
            });
            if let Execution::Management(call) = execution {
                self.apply_management(call);
            }
            info!(id, destination = %destination, total_votes, "transaction executed");
        } else {
            if let Some(tx) = self.transactions.get_mut(id) {
                tx.record_vote(caller);
            }
            self.emit(GovernorEvent::TransactionApproved {
                id,
                destination,
                total_votes,
            });
            info!(id, total_votes, threshold, "transaction approved");
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Pause governance
    // ------------------------------------------------------------------

    /// Halt all state-mutating entry points except `unpause`.
    /// Callable by one admin or Pause-role holder.
    pub fn pause(&mut self, caller: Address) -> Result<(), GovernorError> {
        if self.paused {
            return Err(GovernorError::Paused);
        }
        if !self.is_admin(&caller) && !self.roles.has_role(&RoleId::pause(), &caller) {
            return Err(GovernorError::Unqualified);
        }
        self.paused = true;
        self.emit(GovernorEvent::Paused { account: caller });
        warn!(account = %caller, "engine paused");
        Ok(())
    }

    /// Vote to resume. Requires the admin quorum of distinct admin votes.
    pub fn unpause(&mut self, caller: Address) -> Result<VoteOutcome, GovernorError> {
        if !self.paused {
            return Err(GovernorError::NotPaused);
        }
        self.require_admin(&caller)?;
        let outcome = self
            .unpause_ballots
            .cast_with_threshold((), caller, self.admin_quorum)
            .map_err(|_| GovernorError::AlreadyVoted)?;
        if outcome.reached() {
            self.paused = false;
            self.emit(GovernorEvent::Unpaused { account: caller });
            info!(account = %caller, "engine unpaused");
        }
        Ok(outcome)
    }

    /// Vote to grant the Pause role to `candidate`. Admin voters only.
    pub fn grant_pause_role(
        &mut self,
        caller: Address,
        candidate: Address,
    ) -> Result<VoteOutcome, GovernorError> {
        self.require_not_paused()?;
        self.require_admin(&caller)?;
        let outcome = self
            .grant_pause_ballots
            .cast_with_threshold(candidate, caller, self.admin_quorum)
            .map_err(|_| GovernorError::AlreadyVoted)?;
        if outcome.reached() && self.roles.grant(RoleId::pause(), candidate) {
            self.emit(GovernorEvent::RoleGranted {
                role: RoleId::pause(),
                account: candidate,
                sender: caller,
            });
        }
        Ok(outcome)
    }

    /// Vote to revoke the Pause role from `candidate`. Admin voters only.
    pub fn revoke_pause_role(
        &mut self,
        caller: Address,
        candidate: Address,
    ) -> Result<VoteOutcome, GovernorError> {
        self.require_not_paused()?;
        self.require_admin(&caller)?;
        let outcome = self
            .revoke_pause_ballots
            .cast_with_threshold(candidate, caller, self.admin_quorum)
            .map_err(|_| GovernorError::AlreadyVoted)?;
        if outcome.reached() && self.roles.revoke(&RoleId::pause(), &candidate) {
            self.emit(GovernorEvent::RoleRevoked {
                role: RoleId::pause(),
                account: candidate,
                sender: caller,
            });
        }
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Read-only surface
    // ------------------------------------------------------------------

    pub fn own_address(&self) -> Address {
        self.address
    }

    pub fn admin_quorum(&self) -> u32 {
        self.admin_quorum
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn has_role(&self, role: &RoleId, account: &Address) -> bool {
        self.roles.has_role(role, account)
    }

    pub fn role_member_count(&self, role: &RoleId) -> usize {
        self.roles.member_count(role)
    }

    /// Threshold of a governed function; 0 when ungoverned.
    pub fn required_votes_of_function(&self, target: &Address, signature: &str) -> u32 {
        self.functions
            .required_votes_or_zero(target, &Selector::from_signature(signature))
    }

    pub fn required_votes_of_selector(&self, target: &Address, selector: &Selector) -> u32 {
        self.functions.required_votes_or_zero(target, selector)
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn vote_of_transaction(&self, id: u64, account: &Address) -> bool {
        self.transactions
            .get(id)
            .map(|tx| tx.has_voted(account))
            .unwrap_or(false)
    }

    pub fn grant_admin_votes(&self, candidate: &Address) -> u32 {
        self.grant_admin_ballots.votes(candidate)
    }

    pub fn grant_admin_vote_of(&self, candidate: &Address, voter: &Address) -> bool {
        self.grant_admin_ballots.has_voted(candidate, voter)
    }

    pub fn revoke_admin_votes(&self, candidate: &Address) -> u32 {
        self.revoke_admin_ballots.votes(candidate)
    }

    pub fn revoke_admin_vote_of(&self, candidate: &Address, voter: &Address) -> bool {
        self.revoke_admin_ballots.has_voted(candidate, voter)
    }

    pub fn grant_pause_votes(&self, candidate: &Address) -> u32 {
        self.grant_pause_ballots.votes(candidate)
    }

    pub fn grant_pause_vote_of(&self, candidate: &Address, voter: &Address) -> bool {
        self.grant_pause_ballots.has_voted(candidate, voter)
    }

    pub fn revoke_pause_votes(&self, candidate: &Address) -> u32 {
        self.revoke_pause_ballots.votes(candidate)
    }

    pub fn revoke_pause_vote_of(&self, candidate: &Address, voter: &Address) -> bool {
        self.revoke_pause_ballots.has_voted(candidate, voter)
    }

    pub fn unpause_votes(&self) -> u32 {
        self.unpause_ballots.votes(&())
    }

    pub fn function_grant_votes(
        &self,
        user: &Address,
        target: &Address,
        selector: &Selector,
    ) -> u32 {
        self.grant_function_ballots
            .votes(&(*user, *target, *selector))
    }

    pub fn function_grant_vote_of(
        &self,
        user: &Address,
        target: &Address,
        selector: &Selector,
        voter: &Address,
    ) -> bool {
        self.grant_function_ballots
            .has_voted(&(*user, *target, *selector), voter)
    }

    pub fn function_revoke_votes(
        &self,
        user: &Address,
        target: &Address,
        selector: &Selector,
    ) -> u32 {
        self.revoke_function_ballots
            .votes(&(*user, *target, *selector))
    }

    pub fn function_revoke_vote_of(
        &self,
        user: &Address,
        target: &Address,
        selector: &Selector,
        voter: &Address,
    ) -> bool {
        self.revoke_function_ballots
            .has_voted(&(*user, *target, *selector), voter)
    }

    /// Events emitted so far, in order.
    pub fn events(&self) -> &[GovernorEvent] {
        &self.events
    }

    /// Drain the event journal.
    pub fn take_events(&mut self) -> Vec<GovernorEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn emit(&mut self, event: GovernorEvent) {
        self.events.push(event);
    }

    fn is_admin(&self, account: &Address) -> bool {
        self.roles.has_role(&RoleId::admin(), account)
    }

    fn require_admin(&self, caller: &Address) -> Result<(), GovernorError> {
        if !self.is_admin(caller) {
            return Err(GovernorError::Unqualified);
        }
        Ok(())
    }

    fn require_not_paused(&self) -> Result<(), GovernorError> {
        if self.paused {
            return Err(GovernorError::Paused);
        }
        Ok(())
    }

    fn require_admin_or_function_role(
        &self,
        caller: &Address,
        target: &Address,
        selector: &Selector,
    ) -> Result<(), GovernorError> {
        let role = RoleId::of_function(target, selector);
        if !self.is_admin(caller) && !self.roles.has_role(&role, caller) {
            return Err(GovernorError::Unqualified);
        }
        Ok(())
    }

    /// Ensure an ADMIN role-admin is recorded for a freshly governed
    /// function's derived role, so admins can grant and revoke it before
    /// any user holds it.
    fn adopt_function_role(&mut self, target: Address, selector: Selector) {
        let role = RoleId::of_function(&target, &selector);
        if self.roles.role_admin(&role).is_default() {
            let previous = self.roles.set_role_admin(role, RoleId::admin());
            self.emit(GovernorEvent::RoleAdminChanged {
                role,
                previous_admin: previous,
                new_admin: RoleId::admin(),
            });
        }
    }

    /// Classify and validate what executing `data` against `destination`
    /// will do, without mutating anything.
    fn prepare_execution(
        &self,
        destination: &Address,
        data: &[u8],
    ) -> Result<Execution, GovernorError> {
        if *destination != self.address {
            return Ok(Execution::External);
        }
        // Management mutators are reachable only through this internal
        // execution context, gated on the engine's own Self role.
        if !self.roles.has_role(&RoleId::own(), &self.address) {
            return Err(GovernorError::Unqualified);
        }
        let call = ManagementCall::decode(data)?;
        match &call {
            ManagementCall::SetRequiredVotesOfFunction { required_votes, .. }
                if *required_votes < 1 =>
            {
                return Err(GovernorError::InvalidThreshold)
            }
            ManagementCall::Unpause if !self.paused => return Err(GovernorError::NotPaused),
            _ => {}
        }
        Ok(Execution::Management(call))
    }

    /// Apply a validated management call. Infallible by construction:
    /// every failure mode was checked in `prepare_execution`.
    fn apply_management(&mut self, call: ManagementCall) {
        match call {
            ManagementCall::SetRequiredVotesOfFunction {
                target,
                signature,
                required_votes,
            } => {
                let selector = Selector::from_signature(&signature);
                // Threshold was validated >= 1 before commit.
                if self.functions.set(target, selector, required_votes).is_ok() {
                    self.adopt_function_role(target, selector);
                    self.emit(GovernorEvent::RequiredVotesUpdated {
                        target,
                        selector,
                        required_votes,
                    });
                    info!(target = %target, selector = %selector, required_votes, "required votes updated");
                }
            }
            ManagementCall::GrantAdminRole { account } => {
                if self.roles.grant(RoleId::admin(), account) {
                    self.emit(GovernorEvent::RoleGranted {
                        role: RoleId::admin(),
                        account,
                        sender: self.address,
                    });
                }
                self.emit(GovernorEvent::AdminGranted { account });
            }
            ManagementCall::RevokeAdminRole { account } => {
                if self.roles.revoke(&RoleId::admin(), &account) {
                    self.emit(GovernorEvent::RoleRevoked {
                        role: RoleId::admin(),
                        account,
                        sender: self.address,
                    });
                }
                self.emit(GovernorEvent::AdminRevoked { account });
            }
            ManagementCall::GrantPauseRole { account } => {
                if self.roles.grant(RoleId::pause(), account) {
                    self.emit(GovernorEvent::RoleGranted {
                        role: RoleId::pause(),
                        account,
                        sender: self.address,
                    });
                }
            }
            ManagementCall::RevokePauseRole { account } => {
                if self.roles.revoke(&RoleId::pause(), &account) {
                    self.emit(GovernorEvent::RoleRevoked {
                        role: RoleId::pause(),
                        account,
                        sender: self.address,
                    });
                }
            }
            // Never reached in practice: the ritual itself is blocked while
            // paused, and `prepare_execution` rejects Unpause while running.
            // Kept so the match stays total over the codec.
            ManagementCall::Unpause => {
                self.paused = false;
                self.emit(GovernorEvent::Unpaused {
                    account: self.address,
                });
                info!("engine unpaused via self-call");
            }
            ManagementCall::GrantRoleOfFunction {
                target,
                signature,
                account,
            } => {
                let selector = Selector::from_signature(&signature);
                let role = RoleId::of_function(&target, &selector);
                self.emit(GovernorEvent::FunctionGranted {
                    target,
                    selector,
                    account,
                });
                if self.roles.grant(role, account) {
                    self.emit(GovernorEvent::RoleGranted {
                        role,
                        account,
                        sender: self.address,
                    });
                }
            }
            ManagementCall::RevokeRoleOfFunction {
                target,
                signature,
                account,
            } => {
                let selector = Selector::from_signature(&signature);
                let role = RoleId::of_function(&target, &selector);
                self.emit(GovernorEvent::FunctionRevoked {
                    target,
                    selector,
                    account,
                });
                if self.roles.revoke(&role, &account) {
                    self.emit(GovernorEvent::RoleRevoked {
                        role,
                        account,
                        sender: self.address,
                    });
                }
            }
        }
    }
}
