use alloc::{string::String, vec::Vec};

use bigdecimal::BigDecimal;
use bstr::BString;
use num_bigint::BigInt;
use thiserror::Error;

use crate::{
    Cursor, CursorError, ElementCursor, IonType, SymbolTableRef, SymbolToken, Timestamp,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("injected failure")]
    Injected,
    #[error(transparent)]
    Inner(#[from] CursorError),
}

/// Wraps an [`ElementCursor`], counting calls and injecting failures.
#[derive(Debug)]
pub struct Probe<'a> {
    inner: ElementCursor<'a>,
    /// `advance` calls made at the top level.
    pub top_level_advances: usize,
    pub step_ins: usize,
    pub step_outs: usize,
    /// Fail the n-th `advance` call (0-based) without moving the cursor.
    pub fail_on_advance: Option<usize>,
    /// Fail every read of this kind.
    pub fail_on_read: Option<IonType>,
    /// Report non-null values as kind `null`.
    pub misreport_kind: bool,
    advances: usize,
}

impl<'a> Probe<'a> {
    pub fn new(inner: ElementCursor<'a>) -> Self {
        Self {
            inner,
            top_level_advances: 0,
            step_ins: 0,
            step_outs: 0,
            fail_on_advance: None,
            fail_on_read: None,
            misreport_kind: false,
            advances: 0,
        }
    }

    fn check_read(&self, ion_type: IonType) -> Result<(), ProbeError> {
        if self.fail_on_read == Some(ion_type) {
            Err(ProbeError::Injected)
        } else {
            Ok(())
        }
    }
}

impl Cursor for Probe<'_> {
    type Error = ProbeError;

    fn advance(&mut self) -> Result<Option<IonType>, ProbeError> {
        let call = self.advances;
        self.advances += 1;
        if self.fail_on_advance == Some(call) {
            return Err(ProbeError::Injected);
        }
        if self.inner.depth() == 0 {
            self.top_level_advances += 1;
        }
        Ok(self.inner.advance()?)
    }

    fn ion_type(&self) -> Option<IonType> {
        if self.misreport_kind && !self.inner.is_null() {
            return self.inner.ion_type().map(|_| IonType::Null);
        }
        self.inner.ion_type()
    }

    fn is_null(&self) -> bool {
        self.inner.is_null()
    }

    fn annotations(&self) -> Result<Vec<SymbolToken>, ProbeError> {
        Ok(self.inner.annotations()?)
    }

    fn field_name(&self) -> Result<SymbolToken, ProbeError> {
        Ok(self.inner.field_name()?)
    }

    fn symbol_table(&self) -> SymbolTableRef {
        self.inner.symbol_table()
    }

    fn depth(&self) -> usize {
        self.inner.depth()
    }

    fn step_in(&mut self) -> Result<(), ProbeError> {
        self.step_ins += 1;
        Ok(self.inner.step_in()?)
    }

    fn step_out(&mut self) -> Result<(), ProbeError> {
        self.step_outs += 1;
        Ok(self.inner.step_out()?)
    }

    fn read_bool(&mut self) -> Result<bool, ProbeError> {
        self.check_read(IonType::Bool)?;
        Ok(self.inner.read_bool()?)
    }

    fn read_int(&mut self) -> Result<BigInt, ProbeError> {
        self.check_read(IonType::Int)?;
        Ok(self.inner.read_int()?)
    }

    fn read_float(&mut self) -> Result<f64, ProbeError> {
        self.check_read(IonType::Float)?;
        Ok(self.inner.read_float()?)
    }

    fn read_decimal(&mut self) -> Result<BigDecimal, ProbeError> {
        self.check_read(IonType::Decimal)?;
        Ok(self.inner.read_decimal()?)
    }

    fn read_timestamp(&mut self) -> Result<Timestamp, ProbeError> {
        self.check_read(IonType::Timestamp)?;
        Ok(self.inner.read_timestamp()?)
    }

    fn read_string(&mut self) -> Result<String, ProbeError> {
        self.check_read(IonType::String)?;
        Ok(self.inner.read_string()?)
    }

    fn read_symbol(&mut self) -> Result<SymbolToken, ProbeError> {
        self.check_read(IonType::Symbol)?;
        Ok(self.inner.read_symbol()?)
    }

    fn read_blob(&mut self) -> Result<BString, ProbeError> {
        self.check_read(IonType::Blob)?;
        Ok(self.inner.read_blob()?)
    }

    fn read_clob(&mut self) -> Result<BString, ProbeError> {
        self.check_read(IonType::Clob)?;
        Ok(self.inner.read_clob()?)
    }
}

/// How many property-test cases to run.
pub fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
