pub mod glbuffer;
pub mod gldraw;
pub mod glprogram;
pub mod gltypes;

pub mod gluniforms;
pub mod scenedraw;

pub mod shadersources;
pub mod shape;
