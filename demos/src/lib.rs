// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable examples for `understory_freehand`; see the `examples/` directory.
