//! Jupyter notebook format tests
