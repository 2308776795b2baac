
// Constraint builder tests
mod constraints;


// Domain configuration tests
mod domain;
