//! End to end runs of the rewards migration over snapshot files.
