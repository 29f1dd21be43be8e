//! Configuration bindings for Python.

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::{ConfigRecord, Configuration};

use super::py_neighbourhood::PyNeighbourhood;

/// Python wrapper for Configuration.
///
/// Integer arguments follow the stored record format, so `aging_enabled`
/// is 0 or 1 and intervals are `(min, max)` pairs.
#[pyclass(name = "Configuration")]
#[derive(Clone, Debug)]
pub struct PyConfiguration(pub Configuration);

#[pymethods]
impl PyConfiguration {
    /// Create a validated configuration.
    ///
    /// Raises ValueError if any field is outside its domain.
    #[new]
    fn new(
        radius: i64,
        decay_states: i64,
        aging_enabled: i64,
        survival: [i64; 2],
        birth: [i64; 2],
        neighbourhood: &PyNeighbourhood,
    ) -> PyResult<Self> {
        let record = ConfigRecord {
            radius,
            decay_states,
            aging_enabled,
            survival_interval: survival,
            birth_interval: birth,
            neighbourhood_code: neighbourhood.0.code().to_string(),
        };
        Ok(Self(record.validate()?))
    }

    /// Random configuration; pass a seed for a reproducible one.
    #[staticmethod]
    #[pyo3(signature = (seed = None))]
    fn randomize(seed: Option<u64>) -> Self {
        Self(Configuration::randomize(seed))
    }

    /// Parse rulestring notation such as "R1,C0,M0,S2..3,B3..3,NM".
    #[staticmethod]
    fn from_rulestring(rulestring: &str) -> PyResult<Self> {
        Ok(Self(rulestring.parse()?))
    }

    /// Build from a stored record dict (the output of `to_dict`).
    #[staticmethod]
    fn from_dict(dict: &Bound<'_, PyDict>) -> PyResult<Self> {
        let mut keys = Vec::with_capacity(dict.len());
        for key in dict.keys().iter() {
            keys.push(key.str()?.to_string());
        }
        let unknown = ConfigRecord::unknown_fields(keys.iter().map(String::as_str));
        if !unknown.is_empty() {
            return Err(PyValueError::new_err(format!(
                "unknown field(s): {}",
                unknown.join(", ")
            )));
        }
        let record = ConfigRecord {
            radius: field(dict, "radius")?,
            decay_states: field(dict, "decayStates")?,
            aging_enabled: field(dict, "agingEnabled")?,
            survival_interval: field(dict, "survivalInterval")?,
            birth_interval: field(dict, "birthInterval")?,
            neighbourhood_code: field(dict, "neighbourhoodCode")?,
        };
        Ok(Self(record.validate()?))
    }

    /// The stored record form, ready for `json.dump`.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let record = ConfigRecord::from(self.0);
        let dict = PyDict::new_bound(py);
        dict.set_item("radius", record.radius)?;
        dict.set_item("decayStates", record.decay_states)?;
        dict.set_item("agingEnabled", record.aging_enabled)?;
        dict.set_item("survivalInterval", record.survival_interval.to_vec())?;
        dict.set_item("birthInterval", record.birth_interval.to_vec())?;
        dict.set_item("neighbourhoodCode", record.neighbourhood_code)?;
        Ok(dict)
    }

    #[getter]
    fn radius(&self) -> u8 {
        self.0.radius()
    }

    #[getter]
    fn decay_states(&self) -> u8 {
        self.0.aging_depth()
    }

    #[getter]
    fn aging_enabled(&self) -> bool {
        self.0.aging_enabled()
    }

    #[getter]
    fn survival(&self) -> (u16, u16) {
        self.0.survival().into()
    }

    #[getter]
    fn birth(&self) -> (u16, u16) {
        self.0.birth().into()
    }

    #[getter]
    fn neighbourhood(&self) -> PyNeighbourhood {
        PyNeighbourhood(self.0.shape())
    }

    /// Highest cell state a board with this configuration accepts.
    #[getter]
    fn max_state(&self) -> u8 {
        self.0.max_state()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Configuration({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

fn field<'py, T: FromPyObject<'py>>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T> {
    dict.get_item(key)?
        .ok_or_else(|| PyKeyError::new_err(key.to_string()))?
        .extract()
}
