#[cfg(test)]
mod common;

#[cfg(test)]
mod session_flow_tests;

#[cfg(test)]
mod role_isolation_tests;

#[cfg(test)]
mod pickup_lifecycle_tests;

#[cfg(test)]
mod linked_entity_tests;
