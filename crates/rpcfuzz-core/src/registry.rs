use std::fmt;

use crate::error::RegistryError;
use crate::test_case::RpcTest;

/// Ordered set of test cases for one run.
///
/// Cases can only be appended; the runner reads them in insertion order.
#[derive(Default)]
pub struct Registry {
    tests: Vec<Box<dyn RpcTest>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a case. Cases with an empty method name are refused.
    pub fn push<T>(&mut self, test: T) -> Result<(), RegistryError>
    where
        T: RpcTest + 'static,
    {
        if test.method().is_empty() {
            return Err(RegistryError::EmptyMethod {
                index: self.tests.len(),
            });
        }
        self.tests.push(Box::new(test));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn RpcTest> + '_ {
        self.tests.iter().map(|test| test.as_ref())
    }

    pub fn methods(&self) -> Vec<&str> {
        self.iter().map(|test| test.method()).collect()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("methods", &self.methods())
            .finish()
    }
}
