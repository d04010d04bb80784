mod invariants;
mod replay_files;
mod scenario;
